//! Observer hooks for hearing lifecycle events
//!
//! The repository calls these after a mutation has been persisted and its
//! lock released, so an observer may read from the repository freely.
//! Observers cannot veto or fail a mutation.

use crate::model::{Case, Hearing};

pub trait HearingObserver: Send + Sync {
    /// A new hearing was scheduled on `case`
    fn on_hearing_created(&self, case: &Case, hearing: &Hearing);

    /// An existing hearing was edited; `hearing` is the stored result
    ///
    /// Nothing is withdrawn for the previous version of the hearing. An
    /// observer that queued work for the old date must track and cancel it
    /// itself.
    fn on_hearing_updated(&self, case: &Case, hearing: &Hearing);
}
