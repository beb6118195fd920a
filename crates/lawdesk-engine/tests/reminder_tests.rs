//! Hearing reminders and the daily digest.

mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use common::{demo_day_clock, RecordingScheduler};
use lawdesk_core::logging_facility::test_capture::init_test_capture;
use lawdesk_core::reminders::{DAY_BEFORE_TITLE, HOUR_BEFORE_TITLE};
use lawdesk_core::{HearingDraft, HearingPatch};
use lawdesk_engine::reminders::{send_daily_digest, DAILY_DIGEST_TITLE};
use lawdesk_engine::{CaseRepository, ReminderObserver, Trigger};
use lawdesk_store::MemoryStore;
use tracing::Level;

fn instant(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn repo_with(scheduler: Arc<RecordingScheduler>) -> CaseRepository {
    let clock = demo_day_clock();
    let observer = Arc::new(ReminderObserver::new(scheduler, clock.clone()));
    CaseRepository::open(Arc::new(MemoryStore::new()), clock).with_observer(observer)
}

#[test]
fn test_new_hearing_schedules_two_reminders() {
    // GIVEN a repository wired to a recording scheduler
    let scheduler = Arc::new(RecordingScheduler::default());
    let repo = repo_with(scheduler.clone());

    // WHEN a hearing is added for the 25th at 05:00 UTC
    let hearing = repo
        .add_hearing("case2", HearingDraft::new(instant("2024-01-25T05:00:00Z"), "Bail"))
        .unwrap();

    // THEN a day-before and an hour-before reminder are queued
    let requests = scheduler.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].title, DAY_BEFORE_TITLE);
    assert_eq!(requests[0].trigger, Trigger::At(instant("2024-01-24T09:00:00Z")));
    assert_eq!(requests[1].title, HOUR_BEFORE_TITLE);
    assert_eq!(requests[1].trigger, Trigger::At(instant("2024-01-25T04:00:00Z")));
    assert_eq!(requests[1].data["hearingId"], hearing.id.as_str());
    assert_eq!(requests[1].data["caseNumber"], "CRM/2024/002");
}

#[test]
fn test_hearing_later_today_only_gets_hour_reminder() {
    // GIVEN the clock at 08:00 UTC on the 20th
    let scheduler = Arc::new(RecordingScheduler::default());
    let repo = repo_with(scheduler.clone());

    // WHEN a hearing is added for 11:00 the same day
    repo.add_hearing("case1", HearingDraft::new(instant("2024-01-20T11:00:00Z"), "Cross"))
        .unwrap();

    // THEN the day-before reminder is already in the past and dropped
    let requests = scheduler.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].title, HOUR_BEFORE_TITLE);
}

#[test]
fn test_rescheduling_queues_new_reminders_beside_the_old() {
    // GIVEN a hearing on the 25th with its two reminders queued
    let scheduler = Arc::new(RecordingScheduler::default());
    let repo = repo_with(scheduler.clone());
    let hearing = repo
        .add_hearing("case2", HearingDraft::new(instant("2024-01-25T05:00:00Z"), "Bail"))
        .unwrap();

    // WHEN it is moved to the 27th
    repo.update_hearing(
        "case2",
        &hearing.id,
        HearingPatch {
            date: Some(instant("2024-01-27T05:00:00Z")),
            ..Default::default()
        },
    )
    .unwrap();

    // THEN reminders for the new date are added and the old ones stay queued
    let fire_times: Vec<Trigger> = scheduler.requests().iter().map(|r| r.trigger).collect();
    assert_eq!(
        fire_times,
        vec![
            Trigger::At(instant("2024-01-24T09:00:00Z")),
            Trigger::At(instant("2024-01-25T04:00:00Z")),
            Trigger::At(instant("2024-01-26T09:00:00Z")),
            Trigger::At(instant("2024-01-27T04:00:00Z")),
        ]
    );
}

#[test]
fn test_refused_scheduling_does_not_undo_the_hearing() {
    // GIVEN a scheduler without notification permission
    let capture = init_test_capture();
    let scheduler = Arc::new(RecordingScheduler::default());
    scheduler.refuse.store(true, Ordering::SeqCst);
    let repo = repo_with(scheduler.clone());

    // WHEN a hearing is added
    let hearing = repo
        .add_hearing(
            "case2",
            HearingDraft::new(instant("2024-01-26T05:00:00Z"), "Final arguments"),
        )
        .unwrap();

    // THEN the hearing is stored and the refusal is only logged
    assert!(repo.get("case2").unwrap().hearing(&hearing.id).is_some());
    assert!(scheduler.requests().is_empty());
    assert!(capture.has_message(Level::WARN, "could not schedule hearing reminder"));
}

#[test]
fn test_daily_digest_counts_demo_day() {
    // GIVEN the demo dataset on the day of the first hearing
    let scheduler = RecordingScheduler::default();
    let repo = CaseRepository::open(Arc::new(MemoryStore::new()), demo_day_clock());

    // WHEN the digest is sent
    let digest = send_daily_digest(&repo, &scheduler).unwrap();

    // THEN it reports one hearing today and none tomorrow, immediately
    assert_eq!(digest.title, DAILY_DIGEST_TITLE);
    assert_eq!(digest.body, "You have 1 hearing(s) today and 0 tomorrow");
    assert_eq!(digest.trigger, Trigger::Immediate);
    assert_eq!(digest.data["today"], 1);
    assert_eq!(digest.data["tomorrow"], 0);
    assert_eq!(scheduler.requests(), vec![digest]);
}

#[test]
fn test_daily_digest_surfaces_refusal() {
    let scheduler = RecordingScheduler::default();
    scheduler.refuse.store(true, Ordering::SeqCst);
    let repo = CaseRepository::open(Arc::new(MemoryStore::new()), demo_day_clock());

    let err = send_daily_digest(&repo, &scheduler).unwrap_err();
    assert_eq!(err.code(), "ERR_EXTERNAL_SERVICE");
}
