//! Case repository
//!
//! The only component that reads or writes `cases_data`. Each mutation runs
//! against a working copy of the collection while the lock is held. The copy
//! replaces the in-memory state only after it has been persisted, so a
//! failed write leaves `list()` exactly as it was.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use chrono::{DateTime, Utc};
use lawdesk_core::errors::ExError;
use lawdesk_core::ops::{case_ops, document_ops, hearing_ops};
use lawdesk_core::queries::{self, CaseDocument, CaseHearing, CaseReport, DashboardStats};
use lawdesk_core::seed::demo_cases;
use lawdesk_core::{
    Case, CaseBook, CaseDraft, CasePatch, CaseStatus, Clock, Document, DocumentDraft,
    DocumentType, Hearing, HearingDraft, HearingObserver, HearingPatch,
};
use lawdesk_core::{log_op_end, log_op_error, log_op_start};
use lawdesk_store::codec::{load_json, save_json};
use lawdesk_store::errors::Result;
use lawdesk_store::keys::CASES_DATA;
use lawdesk_store::KeyValueStore;

pub struct CaseRepository {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    book: Mutex<CaseBook>,
    observers: Vec<Arc<dyn HearingObserver>>,
}

/// Read `cases_data`, seeding the demo dataset when nothing is stored
///
/// Never fails: an unreadable blob is logged and replaced in memory by the
/// demo dataset, which is then not persisted so the original blob survives
/// for inspection.
fn load_book(store: &dyn KeyValueStore) -> CaseBook {
    let start = Instant::now();
    log_op_start!("case_load");

    let book = match load_json::<Vec<Case>>(store, CASES_DATA) {
        Ok(Some(cases)) => CaseBook::from_cases(cases),
        Ok(None) => {
            let book = CaseBook::from_cases(demo_cases());
            match save_json(store, CASES_DATA, book.cases()) {
                Ok(()) => tracing::debug!(case_count = book.len(), "seeded demo cases"),
                Err(e) => tracing::warn!(
                    err_code = e.code(),
                    error = %e,
                    "could not persist demo cases, keeping them in memory"
                ),
            }
            book
        }
        Err(e) => {
            tracing::error!(
                err_code = e.code(),
                error = %e,
                "case data unreadable, falling back to demo cases"
            );
            CaseBook::from_cases(demo_cases())
        }
    };

    let duration_ms = start.elapsed().as_millis() as u64;
    log_op_end!("case_load", duration_ms = duration_ms, case_count = book.len());
    book
}

impl CaseRepository {
    /// Open the repository over `store` and perform the first load
    pub fn open(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        let book = load_book(store.as_ref());
        Self {
            store,
            clock,
            book: Mutex::new(book),
            observers: Vec::new(),
        }
    }

    /// Register an observer for hearing events
    pub fn with_observer(mut self, observer: Arc<dyn HearingObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Re-read the stored collection, replacing the in-memory state
    pub fn reload(&self) -> Vec<Case> {
        let mut book = self.lock();
        *book = load_book(self.store.as_ref());
        book.cases().to_vec()
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    // A panic inside a mutation happens before the swap, so even a poisoned
    // guard holds the last persisted collection.
    fn lock(&self) -> MutexGuard<'_, CaseBook> {
        self.book.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn mutate<T, F>(&self, op: &'static str, case_id: Option<&str>, apply: F) -> Result<T>
    where
        F: FnOnce(&mut CaseBook, DateTime<Utc>) -> lawdesk_core::Result<T>,
    {
        let start = Instant::now();
        log_op_start!(op, case_id = case_id);

        let result = self.mutate_impl(apply);

        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => {
                log_op_end!(op, duration_ms = duration_ms, case_id = case_id);
            }
            Err(e) => {
                log_op_error!(op, e.clone(), duration_ms = duration_ms, case_id = case_id);
            }
        }
        result
    }

    fn mutate_impl<T, F>(&self, apply: F) -> Result<T>
    where
        F: FnOnce(&mut CaseBook, DateTime<Utc>) -> lawdesk_core::Result<T>,
    {
        let mut book = self.lock();
        let mut working = book.clone();
        let out = apply(&mut working, self.clock.now())?;
        save_json(self.store.as_ref(), CASES_DATA, working.cases())?;
        *book = working;
        Ok(out)
    }

    fn notify<F>(&self, event: F)
    where
        F: Fn(&dyn HearingObserver),
    {
        for observer in &self.observers {
            event(observer.as_ref());
        }
    }

    // ===== Cases =====

    /// Snapshot of every case in stored order
    pub fn list(&self) -> Vec<Case> {
        self.lock().cases().to_vec()
    }

    /// # Errors
    /// * `ERR_NOT_FOUND` - no case with this id
    pub fn get(&self, id: &str) -> Result<Case> {
        self.lock().get_case(id).cloned().map_err(ExError::from)
    }

    /// Validate, stamp and persist a new case
    ///
    /// # Errors
    /// * `ERR_MISSING_FIELD` / `ERR_INVALID_INPUT` - draft failed validation
    /// * `ERR_IO` / `ERR_PERSISTENCE` - write failed; nothing changed
    pub fn create(&self, draft: CaseDraft) -> Result<Case> {
        self.mutate("case_create", None, |book, now| {
            case_ops::create_case(book, draft, now)
        })
    }

    /// # Errors
    /// * `ERR_NOT_FOUND` - no case with this id
    /// * `ERR_MISSING_FIELD` / `ERR_INVALID_INPUT` - a provided field failed validation
    /// * `ERR_ILLEGAL_TRANSITION` - status change not allowed
    /// * storage kinds - write failed; nothing changed
    pub fn update(&self, id: &str, patch: CasePatch) -> Result<Case> {
        self.mutate("case_update", Some(id), |book, now| {
            case_ops::update_case(book, id, patch, now)
        })
    }

    /// # Errors
    /// * `ERR_NOT_FOUND` - no case with this id
    /// * `ERR_ILLEGAL_TRANSITION` - `status` not reachable from the current one
    pub fn set_status(&self, id: &str, status: CaseStatus) -> Result<Case> {
        self.mutate("case_set_status", Some(id), |book, now| {
            case_ops::set_status(book, id, status, now)
        })
    }

    /// Delete a case with all of its hearings and documents
    ///
    /// # Errors
    /// * `ERR_NOT_FOUND` - no case with this id
    pub fn delete(&self, id: &str) -> Result<Case> {
        self.mutate("case_delete", Some(id), |book, _now| {
            case_ops::delete_case(book, id)
        })
    }

    // ===== Hearings =====

    /// Schedule a hearing and notify observers once it is persisted
    ///
    /// # Errors
    /// * `ERR_NOT_FOUND` - no case with this id
    /// * `ERR_MISSING_FIELD` - blank notes
    pub fn add_hearing(&self, case_id: &str, draft: HearingDraft) -> Result<Hearing> {
        let (case, hearing) = self.mutate("hearing_add", Some(case_id), |book, now| {
            let hearing = hearing_ops::add_hearing(book, case_id, draft, now)?;
            Ok((book.get_case(case_id)?.clone(), hearing))
        })?;
        self.notify(|observer| observer.on_hearing_created(&case, &hearing));
        Ok(hearing)
    }

    /// # Errors
    /// * `ERR_NOT_FOUND` - unknown case or hearing
    /// * `ERR_MISSING_FIELD` - notes provided but blank
    pub fn update_hearing(
        &self,
        case_id: &str,
        hearing_id: &str,
        patch: HearingPatch,
    ) -> Result<Hearing> {
        let (case, hearing) = self.mutate("hearing_update", Some(case_id), |book, now| {
            let hearing = hearing_ops::update_hearing(book, case_id, hearing_id, patch, now)?;
            Ok((book.get_case(case_id)?.clone(), hearing))
        })?;
        self.notify(|observer| observer.on_hearing_updated(&case, &hearing));
        Ok(hearing)
    }

    /// # Errors
    /// * `ERR_NOT_FOUND` - unknown case or hearing
    pub fn delete_hearing(&self, case_id: &str, hearing_id: &str) -> Result<Hearing> {
        self.mutate("hearing_delete", Some(case_id), |book, now| {
            hearing_ops::delete_hearing(book, case_id, hearing_id, now)
        })
    }

    // ===== Documents =====

    /// # Errors
    /// * `ERR_NOT_FOUND` - unknown case, or `hearingId` not in this case
    /// * `ERR_MISSING_FIELD` - blank name, uri or uploader
    pub fn add_document(&self, case_id: &str, draft: DocumentDraft) -> Result<Document> {
        self.mutate("document_add", Some(case_id), |book, now| {
            document_ops::add_document(book, case_id, draft, now)
        })
    }

    /// # Errors
    /// * `ERR_NOT_FOUND` - unknown case or document
    pub fn delete_document(&self, case_id: &str, document_id: &str) -> Result<Document> {
        self.mutate("document_delete", Some(case_id), |book, now| {
            document_ops::delete_document(book, case_id, document_id, now)
        })
    }

    // ===== Derived views =====

    pub fn today_hearings(&self) -> Vec<CaseHearing> {
        queries::today_hearings(self.lock().cases(), self.clock.as_ref())
    }

    pub fn tomorrow_hearings(&self) -> Vec<CaseHearing> {
        queries::tomorrow_hearings(self.lock().cases(), self.clock.as_ref())
    }

    pub fn upcoming_hearings(&self) -> Vec<CaseHearing> {
        queries::upcoming_hearings(self.lock().cases(), self.clock.as_ref())
    }

    pub fn past_hearings(&self) -> Vec<CaseHearing> {
        queries::past_hearings(self.lock().cases(), self.clock.as_ref())
    }

    pub fn by_status(&self, status: CaseStatus) -> Vec<Case> {
        queries::cases_by_status(self.lock().cases(), status)
    }

    pub fn search(&self, query: &str) -> Vec<Case> {
        queries::search_cases(self.lock().cases(), query)
    }

    pub fn search_documents(&self, query: &str, doc_type: Option<DocumentType>) -> Vec<CaseDocument> {
        queries::search_documents(self.lock().cases(), query, doc_type)
    }

    pub fn dashboard(&self) -> DashboardStats {
        DashboardStats::compute(self.lock().cases(), self.clock.as_ref())
    }

    pub fn report(&self) -> CaseReport {
        CaseReport::compute(self.lock().cases())
    }
}
