//! Case repository behaviour over real and failing stores.

mod common;

use std::sync::Arc;

use common::{demo_day_clock, FlakyStore, RecordingObserver};
use lawdesk_core::logging_facility::test_capture::init_test_capture;
use lawdesk_core::{
    CaseDraft, CaseParties, CasePatch, CaseStatus, DocumentDraft, DocumentType, HearingDraft,
    HearingPatch, Party,
};
use lawdesk_engine::CaseRepository;
use lawdesk_store::keys::CASES_DATA;
use lawdesk_store::{FsKvStore, KeyValueStore, MemoryStore};
use tempfile::TempDir;

fn draft(case_number: &str) -> CaseDraft {
    CaseDraft {
        case_number: case_number.to_string(),
        parties: CaseParties {
            plaintiffs: vec![Party::new("Mst. Ayesha Bibi")],
            defendants: vec![Party::new("Muhammad Tariq")],
        },
        assigned_lawyer_id: "2".to_string(),
        created_by: "1".to_string(),
        team_id: "team1".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_round_trip_through_filesystem() {
    // GIVEN a repository on disk with a new case, hearing and document
    let dir = TempDir::new().unwrap();
    let store = Arc::new(FsKvStore::new(dir.path()));
    let repo = CaseRepository::open(store.clone(), demo_day_clock());
    let case = repo.create(draft("FAM/2024/003")).unwrap();
    let hearing = repo
        .add_hearing(
            &case.id,
            HearingDraft::new("2024-02-01T05:00:00Z".parse().unwrap(), "Reconciliation"),
        )
        .unwrap();
    repo.add_document(
        &case.id,
        DocumentDraft {
            name: "Nikah Nama.pdf".to_string(),
            doc_type: DocumentType::Evidence,
            uri: "file://documents/nikah.pdf".to_string(),
            hearing_id: Some(hearing.id.clone()),
            uploaded_by: "2".to_string(),
            ..Default::default()
        },
    )
    .unwrap();

    // WHEN the directory is opened again
    let reopened = CaseRepository::open(Arc::new(FsKvStore::new(dir.path())), demo_day_clock());

    // THEN the collection is identical
    assert_eq!(reopened.list(), repo.list());
    assert_eq!(reopened.list().len(), 3);
    let stored = reopened.get(&case.id).unwrap();
    assert_eq!(stored.hearings[0].hearing_number, 1);
    assert_eq!(stored.documents[0].hearing_id.as_deref(), Some(hearing.id.as_str()));
}

#[test]
fn test_status_query_follows_updates() {
    // GIVEN the demo dataset
    let repo = CaseRepository::open(Arc::new(MemoryStore::new()), demo_day_clock());

    // WHEN one case is adjourned
    repo.update("case2", CasePatch::status(CaseStatus::Adjourned))
        .unwrap();

    // THEN the status views split accordingly
    let active: Vec<String> = repo
        .by_status(CaseStatus::Active)
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(active, vec!["case1".to_string()]);
    assert_eq!(repo.by_status(CaseStatus::Adjourned).len(), 1);

    // AND an illegal move is refused
    repo.set_status("case2", CaseStatus::Disposed).unwrap();
    let err = repo.set_status("case2", CaseStatus::Pending).unwrap_err();
    assert_eq!(err.code(), "ERR_ILLEGAL_TRANSITION");
}

#[test]
fn test_cascade_delete_hides_children_from_every_view() {
    // GIVEN the demo dataset (case1 owns h1 and doc1)
    let repo = CaseRepository::open(Arc::new(MemoryStore::new()), demo_day_clock());
    assert_eq!(repo.today_hearings().len(), 1);

    // WHEN case1 is deleted
    let removed = repo.delete("case1").unwrap();

    // THEN none of its hearings or documents are reachable
    assert_eq!(removed.hearings.len(), 1);
    assert!(repo.today_hearings().is_empty());
    assert!(repo
        .past_hearings()
        .iter()
        .chain(repo.upcoming_hearings().iter())
        .all(|e| e.case.id != "case1"));
    assert!(repo.search_documents("", None).is_empty());
    assert_eq!(repo.report().total_documents, 0);
    assert_eq!(repo.get("case1").unwrap_err().code(), "ERR_NOT_FOUND");
}

#[test]
fn test_failed_write_leaves_state_unchanged() {
    // GIVEN a repository whose store starts refusing writes
    let store = Arc::new(FlakyStore::new());
    let repo = CaseRepository::open(store.clone(), demo_day_clock());
    let before = repo.list();
    store.fail_writes_to(CASES_DATA);

    // WHEN mutations are attempted
    let create = repo.create(draft("CIV/2024/099"));
    let hearing = repo.add_hearing(
        "case1",
        HearingDraft::new("2024-02-01T05:00:00Z".parse().unwrap(), "Cross"),
    );
    let delete = repo.delete("case2");

    // THEN each surfaces the storage error and nothing changed in memory
    assert_eq!(create.unwrap_err().code(), "ERR_PERSISTENCE");
    assert!(hearing.unwrap_err().kind().is_storage());
    assert!(delete.is_err());
    assert_eq!(repo.list(), before);

    // AND once the store recovers, numbering continues as if nothing happened
    store.heal();
    let h = repo
        .add_hearing(
            "case1",
            HearingDraft::new("2024-02-01T05:00:00Z".parse().unwrap(), "Cross"),
        )
        .unwrap();
    assert_eq!(h.hearing_number, 2);
}

#[test]
fn test_corrupt_blob_falls_back_to_seed_without_overwriting() {
    // GIVEN unreadable case data
    let store = Arc::new(MemoryStore::new());
    store.set(CASES_DATA, "[{\"id\": ").unwrap();

    // WHEN the repository opens
    let repo = CaseRepository::open(store.clone(), demo_day_clock());

    // THEN it serves the demo cases but keeps the stored blob as it was
    assert_eq!(repo.list().len(), 2);
    assert_eq!(store.get(CASES_DATA).unwrap().as_deref(), Some("[{\"id\": "));
}

#[test]
fn test_reload_picks_up_external_writes() {
    // GIVEN two repositories over one store
    let store = Arc::new(MemoryStore::new());
    let first = CaseRepository::open(store.clone(), demo_day_clock());
    let second = CaseRepository::open(store.clone(), demo_day_clock());

    // WHEN one of them deletes a case
    first.delete("case2").unwrap();

    // THEN the other only sees it after reloading
    assert_eq!(second.list().len(), 2);
    let reloaded = second.reload();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(second.list(), first.list());
}

#[test]
fn test_seed_survives_failed_first_persist() {
    // GIVEN a store that refuses the seed write
    let store = Arc::new(FlakyStore::new());
    store.fail_writes_to(CASES_DATA);

    // WHEN the repository opens
    let repo = CaseRepository::open(store.clone(), demo_day_clock());

    // THEN the demo cases are still served from memory
    assert_eq!(repo.list().len(), 2);
    assert_eq!(store.get(CASES_DATA).unwrap(), None);
}

#[test]
fn test_observers_see_persisted_hearings() {
    // GIVEN a repository with a recording observer
    let observer = Arc::new(RecordingObserver::default());
    let repo = CaseRepository::open(Arc::new(MemoryStore::new()), demo_day_clock())
        .with_observer(observer.clone());

    // WHEN a hearing is added and then edited
    let h = repo
        .add_hearing(
            "case2",
            HearingDraft::new("2024-01-25T05:00:00Z".parse().unwrap(), "Bail arguments"),
        )
        .unwrap();
    repo.update_hearing(
        "case2",
        &h.id,
        HearingPatch {
            notes: Some("Bail arguments, part heard".to_string()),
            ..Default::default()
        },
    )
    .unwrap();

    // AND a failed add is attempted
    assert!(repo
        .add_hearing("nope", HearingDraft::new("2024-01-25T05:00:00Z".parse().unwrap(), "x"))
        .is_err());

    // THEN only the two successful events were observed
    let events = observer.events.lock().unwrap().clone();
    assert_eq!(
        events,
        vec![
            ("case2".to_string(), 2, true),
            ("case2".to_string(), 2, false)
        ]
    );
}

#[test]
fn test_concurrent_hearing_adds_get_distinct_numbers() {
    // GIVEN a shared repository where case2 already has hearing 1
    let repo = Arc::new(CaseRepository::open(
        Arc::new(MemoryStore::new()),
        demo_day_clock(),
    ));

    // WHEN sixteen threads each add a hearing to case2
    let handles: Vec<_> = (0..16)
        .map(|n| {
            let repo = Arc::clone(&repo);
            std::thread::spawn(move || {
                repo.add_hearing(
                    "case2",
                    HearingDraft::new(
                        "2024-02-01T05:00:00Z".parse().unwrap(),
                        format!("listing {}", n),
                    ),
                )
                .unwrap()
                .hearing_number
            })
        })
        .collect();
    let mut numbers: Vec<u32> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    // THEN every thread got its own number and every hearing was kept
    numbers.sort_unstable();
    assert_eq!(numbers, (2..=17).collect::<Vec<u32>>());
    assert_eq!(repo.get("case2").unwrap().hearings.len(), 17);
}

#[test]
fn test_mutations_log_boundaries() {
    // GIVEN log capture
    let capture = init_test_capture();
    let repo = CaseRepository::open(Arc::new(MemoryStore::new()), demo_day_clock());

    // WHEN a case status changes and an unknown case is deleted
    repo.set_status("case1", CaseStatus::Pending).unwrap();
    let _ = repo.delete("does-not-exist");

    // THEN start, end and error events were emitted
    capture.assert_event_exists("case_set_status", "start");
    capture.assert_event_exists("case_set_status", "end");
    assert!(capture
        .events_for_op("case_set_status")
        .iter()
        .any(|e| e.fields.contains_key("duration_ms")));
    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("case_delete")
            && e.event.as_deref() == Some("end_error")
            && e.fields.get("case_id").map(String::as_str) == Some("does-not-exist")
    });
    assert!(errors >= 1);
}
