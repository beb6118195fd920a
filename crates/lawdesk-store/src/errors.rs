//! Error handling for lawdesk-store
//!
//! Wraps lawdesk-core ExError with store-specific helpers

use lawdesk_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create an error for a stored value that does not decode
pub fn serialization_error(key: &str, err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op("decode")
        .with_entity_id(key)
        .with_message(err.to_string())
}

/// Create an error for a key that cannot be mapped to storage
pub fn invalid_key(key: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("kv_key")
        .with_message(format!(
            "Invalid storage key '{}': use letters, digits, '_' or '-'",
            key
        ))
}

/// Create an error for a lock poisoned by a panicking writer
pub fn poisoned(what: &str) -> ExError {
    ExError::new(ExErrorKind::Concurrency)
        .with_op("lock")
        .with_message(format!("{} lock poisoned", what))
}
