use thiserror::Error;

use crate::model::CaseStatus;

/// Result type alias using LawdeskError
pub type Result<T> = std::result::Result<T, LawdeskError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers (the CLI, tests, any
/// future UI binding) can match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    MissingField,
    NotFound,
    IllegalTransition,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
    ExternalService,
    Concurrency,

    // Auth
    Unauthorised,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::IllegalTransition => "ERR_ILLEGAL_TRANSITION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
            ExErrorKind::Concurrency => "ERR_CONCURRENCY",
            ExErrorKind::Unauthorised => "ERR_UNAUTHORISED",
        }
    }

    /// True for the kinds that describe a failed read or write of the store
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            ExErrorKind::Io | ExErrorKind::Serialization | ExErrorKind::Persistence
        )
    }
}

/// Canonical structured error type
///
/// Store and engine APIs return this type. It carries a classification for
/// programmatic handling and free-form context for humans.
#[derive(Debug, Clone, PartialEq)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add a human-readable message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for the case and session kernel
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LawdeskError {
    // ===== Not found =====
    #[error("Case not found: {case_id}")]
    CaseNotFound { case_id: String },

    #[error("Hearing {hearing_id} not found in case {case_id}")]
    HearingNotFound { case_id: String, hearing_id: String },

    #[error("Document {document_id} not found in case {case_id}")]
    DocumentNotFound {
        case_id: String,
        document_id: String,
    },

    #[error("Notification not found: {notification_id}")]
    NotificationNotFound { notification_id: String },

    // ===== Validation =====
    /// A required field was absent or blank
    #[error("{entity} is missing required field '{field}'")]
    MissingField { entity: String, field: String },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Case {case_id} cannot move from {from} to {to}")]
    IllegalStatusTransition {
        case_id: String,
        from: CaseStatus,
        to: CaseStatus,
    },

    // ===== Auth =====
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Biometric authentication not available")]
    BiometricUnavailable,

    #[error("Biometric authentication failed")]
    BiometricRejected,
}

impl LawdeskError {
    pub fn missing(entity: &str, field: &str) -> Self {
        LawdeskError::MissingField {
            entity: entity.to_string(),
            field: field.to_string(),
        }
    }

    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        LawdeskError::InvalidField {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// Conversion from LawdeskError to the canonical ExError
impl From<LawdeskError> for ExError {
    fn from(err: LawdeskError) -> Self {
        let message = err.to_string();
        match err {
            LawdeskError::CaseNotFound { case_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(case_id)
                .with_message(message),

            LawdeskError::HearingNotFound { hearing_id, .. } => {
                ExError::new(ExErrorKind::NotFound)
                    .with_entity_id(hearing_id)
                    .with_message(message)
            }

            LawdeskError::DocumentNotFound { document_id, .. } => {
                ExError::new(ExErrorKind::NotFound)
                    .with_entity_id(document_id)
                    .with_message(message)
            }

            LawdeskError::NotificationNotFound { notification_id } => {
                ExError::new(ExErrorKind::NotFound)
                    .with_entity_id(notification_id)
                    .with_message(message)
            }

            LawdeskError::MissingField { .. } => {
                ExError::new(ExErrorKind::MissingField).with_message(message)
            }

            LawdeskError::InvalidField { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }

            LawdeskError::IllegalStatusTransition { case_id, .. } => {
                ExError::new(ExErrorKind::IllegalTransition)
                    .with_entity_id(case_id)
                    .with_message(message)
            }

            LawdeskError::InvalidCredentials
            | LawdeskError::BiometricUnavailable
            | LawdeskError::BiometricRejected => {
                ExError::new(ExErrorKind::Unauthorised).with_message(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_not_found_kind() {
        let ex: ExError = LawdeskError::CaseNotFound {
            case_id: "case9".to_string(),
        }
        .into();
        assert_eq!(ex.kind(), ExErrorKind::NotFound);
        assert_eq!(ex.code(), "ERR_NOT_FOUND");
        assert_eq!(ex.entity_id(), Some("case9"));
    }

    #[test]
    fn test_auth_failures_keep_readable_reason() {
        let ex: ExError = LawdeskError::InvalidCredentials.into();
        assert_eq!(ex.kind(), ExErrorKind::Unauthorised);
        assert_eq!(ex.message(), "Invalid credentials");

        let ex: ExError = LawdeskError::BiometricUnavailable.into();
        assert_eq!(ex.message(), "Biometric authentication not available");
    }

    #[test]
    fn test_transition_error_message() {
        let err = LawdeskError::IllegalStatusTransition {
            case_id: "case1".to_string(),
            from: CaseStatus::Disposed,
            to: CaseStatus::Active,
        };
        assert_eq!(
            err.to_string(),
            "Case case1 cannot move from disposed to active"
        );
        let ex: ExError = err.into();
        assert_eq!(ex.code(), "ERR_ILLEGAL_TRANSITION");
    }

    #[test]
    fn test_display_includes_op_and_entity() {
        let ex = ExError::new(ExErrorKind::Persistence)
            .with_op("kv_set")
            .with_entity_id("cases_data")
            .with_message("disk full");
        assert_eq!(
            ex.to_string(),
            "[ERR_PERSISTENCE] in operation 'kv_set': disk full (entity_id: cases_data)"
        );
    }

    #[test]
    fn test_storage_kinds() {
        assert!(ExErrorKind::Io.is_storage());
        assert!(ExErrorKind::Serialization.is_storage());
        assert!(ExErrorKind::Persistence.is_storage());
        assert!(!ExErrorKind::NotFound.is_storage());
    }
}
