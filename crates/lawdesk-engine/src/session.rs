//! Session store
//!
//! A session is the pair (token in the vault, user JSON under `user_data`).
//! Both halves are written on login and removed on logout; a half-present
//! or unreadable session found on restore is cleared.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use lawdesk_core::errors::{ExError, LawdeskError};
use lawdesk_core::User;
use lawdesk_core::{log_op_end, log_op_error, log_op_start};
use lawdesk_core_types::Sensitive;
use lawdesk_store::codec::save_json;
use lawdesk_store::errors::Result;
use lawdesk_store::keys::USER_DATA;
use lawdesk_store::{KeyValueStore, TokenVault};
use uuid::Uuid;

use crate::auth::AuthBackend;
use crate::biometrics::{BiometricVerifier, BIOMETRIC_PROMPT};

/// An authenticated user and the opaque token that proves it
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: Sensitive<String>,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Anonymous,
    Authenticated(Session),
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(session) => Some(&session.user),
            SessionState::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

pub struct SessionStore {
    vault: TokenVault,
    store: Arc<dyn KeyValueStore>,
    auth: Arc<dyn AuthBackend>,
    biometrics: Arc<dyn BiometricVerifier>,
    biometric_account: String,
    current: Mutex<Option<Session>>,
}

fn finish<T>(op: &'static str, start: Instant, result: Result<T>) -> Result<T> {
    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => {
            log_op_end!(op, duration_ms = duration_ms);
        }
        Err(e) => {
            log_op_error!(op, e.clone(), duration_ms = duration_ms);
        }
    }
    result
}

impl SessionStore {
    pub fn new(
        vault: TokenVault,
        store: Arc<dyn KeyValueStore>,
        auth: Arc<dyn AuthBackend>,
        biometrics: Arc<dyn BiometricVerifier>,
        biometric_account: impl Into<String>,
    ) -> Self {
        Self {
            vault,
            store,
            auth,
            biometrics,
            biometric_account: biometric_account.into(),
            current: Mutex::new(None),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Session>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The in-memory session, if any
    pub fn current(&self) -> Option<Session> {
        self.lock().clone()
    }

    /// Rebuild the session from storage
    ///
    /// Never fails. Read errors are logged and reported as anonymous; a
    /// corrupt or half-written session is removed from storage.
    pub fn restore(&self) -> SessionState {
        let start = Instant::now();
        log_op_start!("session_restore");

        let mut current = self.lock();
        let state = self.restore_impl();
        *current = match &state {
            SessionState::Authenticated(session) => Some(session.clone()),
            SessionState::Anonymous => None,
        };

        let duration_ms = start.elapsed().as_millis() as u64;
        log_op_end!(
            "session_restore",
            duration_ms = duration_ms,
            authenticated = state.is_authenticated()
        );
        state
    }

    fn restore_impl(&self) -> SessionState {
        let token = match self.vault.load() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(err_code = e.code(), error = %e, "could not read session token");
                return SessionState::Anonymous;
            }
        };
        let raw_user = match self.store.get(USER_DATA) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(err_code = e.code(), error = %e, "could not read session user");
                return SessionState::Anonymous;
            }
        };

        match (token, raw_user) {
            (Some(token), Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => SessionState::Authenticated(Session { token, user }),
                Err(e) => {
                    tracing::warn!(error = %e, "stored user is unreadable, clearing session");
                    self.clear_stored();
                    SessionState::Anonymous
                }
            },
            (None, None) => SessionState::Anonymous,
            (token, _) => {
                tracing::warn!(
                    has_token = token.is_some(),
                    "incomplete session in storage, clearing it"
                );
                self.clear_stored();
                SessionState::Anonymous
            }
        }
    }

    fn clear_stored(&self) {
        if let Err(e) = self.remove_both() {
            tracing::warn!(err_code = e.code(), error = %e, "could not clear stored session");
        }
    }

    /// Remove token and user, attempting both; first error wins
    fn remove_both(&self) -> Result<()> {
        let token_result = self.vault.clear();
        let user_result = self.store.remove(USER_DATA);
        token_result.and(user_result)
    }

    /// Mint a token and persist both halves for `user`
    ///
    /// If the user cannot be written the token is taken back out, so a
    /// failed login never leaves half a session behind.
    fn establish(&self, current: &mut Option<Session>, user: User) -> Result<Session> {
        let token = Sensitive::new(Uuid::new_v4().simple().to_string());
        self.vault.store(&token)?;
        if let Err(e) = save_json(self.store.as_ref(), USER_DATA, &user) {
            if let Err(rollback) = self.vault.clear() {
                tracing::warn!(error = %rollback, "could not roll back session token");
            }
            return Err(e);
        }

        let session = Session { token, user };
        *current = Some(session.clone());
        Ok(session)
    }

    /// Sign in with email and password
    ///
    /// # Errors
    /// * `ERR_UNAUTHORISED` - "Invalid credentials"; nothing is persisted
    /// * storage kinds - the session could not be written
    pub fn login(&self, email: &str, password: &Sensitive<String>) -> Result<Session> {
        let start = Instant::now();
        log_op_start!("session_login");

        let mut current = self.lock();
        let result = self
            .auth
            .verify(email, password)
            .map_err(ExError::from)
            .and_then(|user| self.establish(&mut current, user));

        finish("session_login", start, result)
    }

    /// Sign in with the platform biometric check
    ///
    /// A successful check signs in the configured biometric account.
    ///
    /// # Errors
    /// * `ERR_UNAUTHORISED` - "Biometric authentication not available" when
    ///   there is no hardware or nothing enrolled, "Biometric authentication
    ///   failed" when the check is rejected, "Invalid credentials" when the
    ///   configured account is not in the directory
    pub fn login_with_biometrics(&self) -> Result<Session> {
        let start = Instant::now();
        log_op_start!("session_login_biometric");

        let mut current = self.lock();
        let result = self
            .biometric_user()
            .map_err(ExError::from)
            .and_then(|user| self.establish(&mut current, user));

        finish("session_login_biometric", start, result)
    }

    fn biometric_user(&self) -> lawdesk_core::Result<User> {
        if !self.biometrics.has_hardware() || !self.biometrics.is_enrolled() {
            return Err(LawdeskError::BiometricUnavailable);
        }
        if !self.biometrics.authenticate(BIOMETRIC_PROMPT) {
            return Err(LawdeskError::BiometricRejected);
        }
        self.auth
            .find_by_email(&self.biometric_account)
            .ok_or(LawdeskError::InvalidCredentials)
    }

    /// Sign out; safe to call when nobody is signed in
    ///
    /// # Errors
    ///
    /// A storage removal failed. The in-memory session is cleared anyway.
    pub fn logout(&self) -> Result<()> {
        let start = Instant::now();
        log_op_start!("session_logout");

        let mut current = self.lock();
        *current = None;
        let result = self.remove_both();

        finish("session_logout", start, result)
    }
}
