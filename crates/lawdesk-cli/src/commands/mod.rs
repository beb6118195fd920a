//! Subcommand implementations

pub mod cases;
pub mod digest;
pub mod documents;
pub mod hearings;
pub mod notifications;
pub mod output;
pub mod session;
pub mod stats;

use std::sync::Arc;

use lawdesk_core::SystemClock;
use lawdesk_engine::{DirectoryAuthBackend, LawdeskConfig, UnavailableBiometrics, Workspace};

/// Open the workspace with the wall clock and the built-in user directory
///
/// A terminal has no biometric hardware, so biometric login always reports
/// it as unavailable.
pub fn open_workspace(config: &LawdeskConfig) -> Workspace {
    Workspace::open(
        config,
        Arc::new(SystemClock),
        Arc::new(DirectoryAuthBackend::demo()),
        Arc::new(UnavailableBiometrics),
    )
}
