//! Lawdesk Engine - Orchestration layer
//!
//! Coordinates the in-memory kernel with persistence: the case repository,
//! the session store, the notification log and reminder delivery. Every
//! public mutation logs its start and end at this layer.

pub mod auth;
pub mod biometrics;
pub mod case_repository;
pub mod config;
pub mod notifications;
pub mod reminders;
pub mod session;
pub mod workspace;

pub use auth::{AuthBackend, DirectoryAuthBackend};
pub use biometrics::{BiometricVerifier, UnavailableBiometrics};
pub use case_repository::CaseRepository;
pub use config::LawdeskConfig;
pub use notifications::NotificationLog;
pub use reminders::{NotificationScheduler, ReminderObserver, ScheduledNotification, Trigger};
pub use session::{Session, SessionState, SessionStore};
pub use workspace::Workspace;
