pub mod validation;

pub use validation::{
    validate_case_draft, validate_case_patch, validate_document_draft, validate_hearing_draft,
    validate_hearing_patch, validate_status_transition,
};
