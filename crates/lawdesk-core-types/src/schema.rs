//! Canonical schema constants for structured logging
//!
//! Every boundary log line uses these keys so that log queries work the same
//! way across the repository, session and notification layers.

// Canonical field keys
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_CASE_ID: &str = "case_id";
pub const FIELD_HEARING_ID: &str = "hearing_id";
pub const FIELD_DOCUMENT_ID: &str = "document_id";
pub const FIELD_USER_ID: &str = "user_id";
pub const FIELD_STORAGE_KEY: &str = "storage_key";

// Collection sizes
pub const FIELD_CASE_COUNT: &str = "case_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_entity_keys_are_distinct() {
        let keys = [
            FIELD_CASE_ID,
            FIELD_HEARING_ID,
            FIELD_DOCUMENT_ID,
            FIELD_USER_ID,
            FIELD_STORAGE_KEY,
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
