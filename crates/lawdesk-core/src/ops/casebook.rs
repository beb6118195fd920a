use serde::{Deserialize, Serialize};

use crate::errors::{LawdeskError, Result};
use crate::model::Case;

/// In-memory case collection
///
/// Insertion order is preserved and is the order the collection is
/// persisted in. Not thread-safe on its own; the repository wraps it in a
/// lock. Serializes as a plain JSON array of cases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseBook {
    cases: Vec<Case>,
}

impl CaseBook {
    pub fn new() -> Self {
        Self { cases: Vec::new() }
    }

    pub fn from_cases(cases: Vec<Case>) -> Self {
        Self { cases }
    }

    /// Get a case by ID
    ///
    /// # Errors
    ///
    /// Returns `CaseNotFound` if no case has this id.
    pub fn get_case(&self, id: &str) -> Result<&Case> {
        self.cases
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| LawdeskError::CaseNotFound {
                case_id: id.to_string(),
            })
    }

    /// Get a mutable reference to a case by ID
    ///
    /// # Errors
    ///
    /// Returns `CaseNotFound` if no case has this id.
    pub fn get_case_mut(&mut self, id: &str) -> Result<&mut Case> {
        self.cases
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| LawdeskError::CaseNotFound {
                case_id: id.to_string(),
            })
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn contains(&self, id: &str) -> bool {
        self.cases.iter().any(|c| c.id == id)
    }

    /// Append a case without validation (used by operations and seeding)
    pub fn insert_case(&mut self, case: Case) {
        self.cases.push(case);
    }

    /// Remove a case together with everything it owns
    ///
    /// # Errors
    ///
    /// Returns `CaseNotFound` if no case has this id.
    pub fn remove_case(&mut self, id: &str) -> Result<Case> {
        let index = self
            .cases
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| LawdeskError::CaseNotFound {
                case_id: id.to_string(),
            })?;
        Ok(self.cases.remove(index))
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}
