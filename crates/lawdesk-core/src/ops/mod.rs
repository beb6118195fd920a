pub mod case_ops;
pub mod casebook;
pub mod document_ops;
pub mod hearing_ops;

pub use casebook::CaseBook;
