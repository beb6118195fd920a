//! The vault falls back to the general store and logs that it did.

use std::sync::Arc;

use lawdesk_core::logging_facility::test_capture::init_test_capture;
use lawdesk_core_types::Sensitive;
use lawdesk_store::keys::AUTH_TOKEN;
use lawdesk_store::{KeyValueStore, MemoryStore, TokenVault};
use tracing::Level;

#[test]
fn test_fallback_write_is_logged_at_warn() {
    // GIVEN a vault without a secure store
    let capture = init_test_capture();
    let general = Arc::new(MemoryStore::new());
    let vault = TokenVault::new(None, general.clone());

    // WHEN a token is stored
    vault
        .store(&Sensitive::new("fallback-token".to_string()))
        .expect("Should store token");

    // THEN it lands in the general store under the fixed key
    assert_eq!(
        general.get(AUTH_TOKEN).unwrap().as_deref(),
        Some("fallback-token")
    );

    // AND the fallback was announced
    assert!(capture.has_message(Level::WARN, "secure store unavailable"));

    // AND the token itself never reached the log
    assert_eq!(
        capture.count_events(|e| e.fields.values().any(|v| v.contains("fallback-token"))),
        0
    );
}

#[test]
fn test_fallback_load_and_clear() {
    // GIVEN a token kept in the general store
    let general = Arc::new(MemoryStore::new());
    let vault = TokenVault::new(None, general.clone());
    vault.store(&Sensitive::new("t".to_string())).unwrap();

    // WHEN loading and then clearing twice
    let loaded = vault.load().unwrap();
    vault.clear().unwrap();
    vault.clear().unwrap();

    // THEN the token was readable and is now gone
    assert_eq!(loaded, Some(Sensitive::new("t".to_string())));
    assert_eq!(vault.load().unwrap(), None);
}
