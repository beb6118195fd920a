//! Read-only projections over the case collection
//!
//! All queries are linear scans over `&[Case]` and return owned values so
//! callers can release the repository lock before using the results.

pub mod case_queries;
pub mod document_queries;
pub mod hearing_queries;
pub mod stats;

pub use case_queries::{cases_by_status, search_cases};
pub use document_queries::{search_documents, CaseDocument};
pub use hearing_queries::{
    all_hearings, hearings_on, past_hearings, today_hearings, tomorrow_hearings,
    upcoming_hearings, CaseHearing,
};
pub use stats::{CaseReport, CourtTally, DashboardStats};
