//! Credential verification against a user directory

use lawdesk_core::errors::LawdeskError;
use lawdesk_core::seed::{demo_users, DEMO_PASSWORD};
use lawdesk_core::User;
use lawdesk_core_types::Sensitive;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Source of truth for who may sign in
pub trait AuthBackend: Send + Sync {
    /// Check an email/password pair
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` for an unknown email or a wrong password; the
    /// two cases are deliberately indistinguishable.
    fn verify(&self, email: &str, password: &Sensitive<String>) -> lawdesk_core::Result<User>;

    fn find_by_email(&self, email: &str) -> Option<User>;
}

struct DirectoryEntry {
    user: User,
    salt: String,
    digest: String,
}

fn password_digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Static in-process directory with salted SHA-256 password digests
#[derive(Default)]
pub struct DirectoryAuthBackend {
    entries: Vec<DirectoryEntry>,
}

impl DirectoryAuthBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo team, every member signing in with the demo password
    pub fn demo() -> Self {
        let password = Sensitive::new(DEMO_PASSWORD.to_string());
        demo_users()
            .into_iter()
            .fold(Self::new(), |dir, user| dir.with_user(user, &password))
    }

    /// Add a user; an existing entry with the same email is replaced
    pub fn with_user(mut self, user: User, password: &Sensitive<String>) -> Self {
        let salt = Uuid::new_v4().simple().to_string();
        let digest = password_digest(&salt, password.expose());
        self.entries.retain(|e| e.user.email != user.email);
        self.entries.push(DirectoryEntry { user, salt, digest });
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookup is by exact email; no trimming or case folding
    fn entry(&self, email: &str) -> Option<&DirectoryEntry> {
        self.entries.iter().find(|e| e.user.email == email)
    }
}

impl AuthBackend for DirectoryAuthBackend {
    fn verify(&self, email: &str, password: &Sensitive<String>) -> lawdesk_core::Result<User> {
        match self.entry(email) {
            Some(entry) if password_digest(&entry.salt, password.expose()) == entry.digest => {
                Ok(entry.user.clone())
            }
            _ => {
                tracing::debug!("credential check failed");
                Err(LawdeskError::InvalidCredentials)
            }
        }
    }

    fn find_by_email(&self, email: &str) -> Option<User> {
        self.entry(email).map(|e| e.user.clone())
    }
}
