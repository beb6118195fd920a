//! Lawdesk Store - key-value persistence for the case and session layers
//!
//! Provides:
//! - The `KeyValueStore` contract with filesystem and in-memory backends
//! - Atomic temp→rename writes, one file per key
//! - A secure credential store and the token vault that falls back to the
//!   general store when no secure store is configured
//! - JSON codec helpers over any store

pub mod codec;
pub mod errors;
pub mod keys;
pub mod kv;
pub mod secure;

// Re-export key types
pub use errors::Result;
pub use kv::{FsKvStore, KeyValueStore, MemoryStore};
pub use secure::{FsSecureStore, SecureStore, TokenVault};
