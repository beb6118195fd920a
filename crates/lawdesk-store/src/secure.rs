//! Credential storage for the session token
//!
//! The token goes to a [`SecureStore`] when one is configured. Without one,
//! [`TokenVault`] falls back to the general key-value store and says so at
//! `warn` level every time it does.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use lawdesk_core_types::Sensitive;

use crate::errors::{io_error, Result};
use crate::keys::AUTH_TOKEN;
use crate::kv::atomic::atomic_write_private;
use crate::kv::{validate_key, KeyValueStore};

/// Store for secrets, kept apart from ordinary application data
pub trait SecureStore: Send + Sync {
    fn get_secret(&self, key: &str) -> Result<Option<Sensitive<String>>>;

    fn set_secret(&self, key: &str, value: &Sensitive<String>) -> Result<()>;

    fn remove_secret(&self, key: &str) -> Result<()>;
}

/// Secrets as owner-only files (`<key>.secret`) in a dedicated directory
#[derive(Debug, Clone)]
pub struct FsSecureStore {
    root: PathBuf,
}

impl FsSecureStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.secret", key)))
    }
}

impl SecureStore for FsSecureStore {
    fn get_secret(&self, key: &str) -> Result<Option<Sensitive<String>>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(Sensitive::new(value))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error("secure_get", e).with_entity_id(key)),
        }
    }

    fn set_secret(&self, key: &str, value: &Sensitive<String>) -> Result<()> {
        let path = self.path_for(key)?;
        atomic_write_private(&path, value.expose().as_bytes())
            .map_err(|e| e.with_entity_id(key))?;
        tracing::debug!(key, "stored secret");
        Ok(())
    }

    fn remove_secret(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error("secure_remove", e).with_entity_id(key)),
        }
    }
}

/// Where the session token lives
pub struct TokenVault {
    secure: Option<Arc<dyn SecureStore>>,
    fallback: Arc<dyn KeyValueStore>,
}

impl TokenVault {
    pub fn new(secure: Option<Arc<dyn SecureStore>>, fallback: Arc<dyn KeyValueStore>) -> Self {
        Self { secure, fallback }
    }

    pub fn load(&self) -> Result<Option<Sensitive<String>>> {
        match &self.secure {
            Some(secure) => secure.get_secret(AUTH_TOKEN),
            None => Ok(self.fallback.get(AUTH_TOKEN)?.map(Sensitive::new)),
        }
    }

    pub fn store(&self, token: &Sensitive<String>) -> Result<()> {
        match &self.secure {
            Some(secure) => secure.set_secret(AUTH_TOKEN, token),
            None => {
                tracing::warn!(
                    key = AUTH_TOKEN,
                    "secure store unavailable, keeping session token in the general store"
                );
                self.fallback.set(AUTH_TOKEN, token.expose())
            }
        }
    }

    /// Remove the token from the secure store and the fallback
    ///
    /// Both locations are cleared even if the first removal fails; the first
    /// error is returned.
    pub fn clear(&self) -> Result<()> {
        let secure_result = match &self.secure {
            Some(secure) => secure.remove_secret(AUTH_TOKEN),
            None => Ok(()),
        };
        let fallback_result = self.fallback.remove(AUTH_TOKEN);
        secure_result.and(fallback_result)
    }
}
