//! JSON codec over any [`KeyValueStore`]

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{serialization_error, Result};
use crate::kv::KeyValueStore;

/// Read and decode the value under `key`
///
/// # Errors
///
/// Storage read failures pass through; a value that does not decode as `T`
/// yields an `ERR_SERIALIZATION` error carrying the key.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    match store.get(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| serialization_error(key, e)),
        None => Ok(None),
    }
}

/// Encode `value` and store it under `key`
///
/// # Errors
///
/// Encoding or storage write failure.
pub fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<()> {
    let raw = serde_json::to_string(value).map_err(|e| serialization_error(key, e))?;
    store.set(key, &raw)
}
