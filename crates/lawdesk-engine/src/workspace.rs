//! Wiring of stores and services from a [`LawdeskConfig`]

use std::sync::Arc;

use lawdesk_core::Clock;
use lawdesk_store::{FsKvStore, FsSecureStore, KeyValueStore, SecureStore, TokenVault};

use crate::auth::AuthBackend;
use crate::biometrics::BiometricVerifier;
use crate::case_repository::CaseRepository;
use crate::config::LawdeskConfig;
use crate::notifications::NotificationLog;
use crate::session::SessionStore;

/// The repository, session store and notification log over one data
/// directory
pub struct Workspace {
    pub cases: CaseRepository,
    pub sessions: SessionStore,
    pub notifications: NotificationLog,
}

impl Workspace {
    /// Open everything rooted at the configured directories
    ///
    /// Opening does not touch the session; call `sessions.restore()`.
    pub fn open(
        config: &LawdeskConfig,
        clock: Arc<dyn Clock>,
        auth: Arc<dyn AuthBackend>,
        biometrics: Arc<dyn BiometricVerifier>,
    ) -> Self {
        let store: Arc<dyn KeyValueStore> = Arc::new(FsKvStore::new(&config.storage.data_dir));
        let secure = config
            .storage
            .secure_dir
            .as_ref()
            .map(|dir| Arc::new(FsSecureStore::new(dir)) as Arc<dyn SecureStore>);

        Self::from_stores(store, secure, config, clock, auth, biometrics)
    }

    /// Build over explicit stores
    pub fn from_stores(
        store: Arc<dyn KeyValueStore>,
        secure: Option<Arc<dyn SecureStore>>,
        config: &LawdeskConfig,
        clock: Arc<dyn Clock>,
        auth: Arc<dyn AuthBackend>,
        biometrics: Arc<dyn BiometricVerifier>,
    ) -> Self {
        let vault = TokenVault::new(secure, store.clone());
        Self {
            cases: CaseRepository::open(store.clone(), clock.clone()),
            sessions: SessionStore::new(
                vault,
                store.clone(),
                auth,
                biometrics,
                config.session.biometric_account.clone(),
            ),
            notifications: NotificationLog::new(store, clock),
        }
    }
}
