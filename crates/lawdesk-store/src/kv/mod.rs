//! Key-value blob storage
//!
//! Values are opaque strings (JSON in practice). A missing key reads as
//! `None`; removing a missing key succeeds.

pub(crate) mod atomic;
mod fs_store;
mod memory;

pub use fs_store::FsKvStore;
pub use memory::MemoryStore;

use crate::errors::{invalid_key, Result};

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}

/// Keys become file names, so only a conservative character set is allowed
pub(crate) fn validate_key(key: &str) -> Result<()> {
    let ok = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if ok {
        Ok(())
    } else {
        Err(invalid_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;

    #[test]
    fn test_validate_key() {
        for key in keys::ALL {
            assert!(validate_key(key).is_ok(), "{}", key);
        }
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("cases data").is_err());
    }
}
