//! Lawdesk Core - in-memory kernel for case management
//!
//! This crate holds everything that does not touch storage:
//! - Case, hearing, document, user and notification models
//! - Validation rules and the case status machine
//! - Pure mutation operations over a [`CaseBook`]
//! - Read-only queries (hearing day buckets, search, statistics)
//! - Reminder planning, observer hooks and the demo dataset
//! - The error and logging facilities shared by the other crates

pub mod clock;
pub mod errors;
pub mod hooks;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod queries;
pub mod reminders;
pub mod rules;
pub mod seed;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{ExError, ExErrorKind, LawdeskError, Result};
pub use hooks::HearingObserver;
pub use model::{
    AppNotification, Case, CaseDraft, CaseParties, CasePatch, CaseStatus, CourtName,
    CourtOrderType, Document, DocumentDraft, DocumentType, Hearing, HearingDraft, HearingPatch,
    LegalSection, NotificationDraft, NotificationType, Party, User, UserRole,
};
pub use ops::CaseBook;
