//! Core types shared across the Lawdesk crates
//!
//! - **Sensitive data**: `Sensitive<T>` marker for automatic redaction of
//!   passwords and session tokens
//! - **Schema constants**: canonical field keys and event names used by the
//!   logging facility

pub mod schema;
pub mod sensitive;

pub use sensitive::Sensitive;
