//! Field-level validation for drafts and patches
//!
//! Validation runs before any mutation, so a rejected input never changes
//! the collection.

use crate::errors::{LawdeskError, Result};
use crate::model::{
    Case, CaseDraft, CaseParties, CasePatch, CaseStatus, DocumentDraft, HearingDraft,
    HearingPatch,
};

fn require(entity: &str, field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LawdeskError::missing(entity, field));
    }
    Ok(())
}

/// Each side needs at least one party and every party needs a name
fn validate_parties(parties: &CaseParties) -> Result<()> {
    if parties.plaintiffs.is_empty() {
        return Err(LawdeskError::missing("Case", "parties.plaintiffs"));
    }
    if parties.defendants.is_empty() {
        return Err(LawdeskError::missing("Case", "parties.defendants"));
    }
    for party in parties.iter() {
        require("Party", "name", &party.name)?;
    }
    Ok(())
}

fn validate_opponent_lawyers(names: &[String]) -> Result<()> {
    if names.iter().any(|n| n.trim().is_empty()) {
        return Err(LawdeskError::invalid(
            "opponentLawyers",
            "names cannot be blank",
        ));
    }
    Ok(())
}

/// Validate a new case
///
/// # Errors
/// * `MissingField` - blank case number, no plaintiff/defendant, or a
///   nameless party
/// * `InvalidField` - blank opponent lawyer name
pub fn validate_case_draft(draft: &CaseDraft) -> Result<()> {
    require("Case", "caseNumber", &draft.case_number)?;
    validate_parties(&draft.parties)?;
    validate_opponent_lawyers(&draft.opponent_lawyers)?;
    Ok(())
}

/// Validate a patch against the case it will be applied to
///
/// # Errors
/// * `MissingField` / `InvalidField` - as for drafts, for provided fields
/// * `IllegalStatusTransition` - status change not allowed from the
///   current status
pub fn validate_case_patch(case: &Case, patch: &CasePatch) -> Result<()> {
    if let Some(number) = &patch.case_number {
        require("Case", "caseNumber", number)?;
    }
    if let Some(parties) = &patch.parties {
        validate_parties(parties)?;
    }
    if let Some(lawyers) = &patch.opponent_lawyers {
        validate_opponent_lawyers(lawyers)?;
    }
    if let Some(next) = patch.status {
        validate_status_transition(case, next)?;
    }
    Ok(())
}

/// # Errors
/// * `IllegalStatusTransition` - `next` is not reachable from the current
///   status
pub fn validate_status_transition(case: &Case, next: CaseStatus) -> Result<()> {
    if !case.status.can_transition_to(next) {
        return Err(LawdeskError::IllegalStatusTransition {
            case_id: case.id.clone(),
            from: case.status,
            to: next,
        });
    }
    Ok(())
}

/// # Errors
/// * `MissingField` - blank notes
pub fn validate_hearing_draft(draft: &HearingDraft) -> Result<()> {
    require("Hearing", "notes", &draft.notes)
}

/// # Errors
/// * `MissingField` - notes provided but blank
pub fn validate_hearing_patch(patch: &HearingPatch) -> Result<()> {
    if let Some(notes) = &patch.notes {
        require("Hearing", "notes", notes)?;
    }
    Ok(())
}

/// # Errors
/// * `MissingField` - blank name, uri or uploader
pub fn validate_document_draft(draft: &DocumentDraft) -> Result<()> {
    require("Document", "name", &draft.name)?;
    require("Document", "uri", &draft.uri)?;
    require("Document", "uploadedBy", &draft.uploaded_by)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Party;
    use chrono::Utc;

    fn draft() -> CaseDraft {
        CaseDraft {
            case_number: "CIV/2024/003".to_string(),
            parties: CaseParties {
                plaintiffs: vec![Party::new("Plaintiff")],
                defendants: vec![Party::new("Defendant")],
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(validate_case_draft(&draft()).is_ok());
    }

    #[test]
    fn test_blank_case_number_rejected() {
        let mut d = draft();
        d.case_number = "   ".to_string();
        assert_eq!(
            validate_case_draft(&d),
            Err(LawdeskError::missing("Case", "caseNumber"))
        );
    }

    #[test]
    fn test_nameless_party_rejected() {
        let mut d = draft();
        d.parties.defendants.push(Party::new(""));
        assert_eq!(
            validate_case_draft(&d),
            Err(LawdeskError::missing("Party", "name"))
        );
    }

    #[test]
    fn test_missing_side_rejected() {
        let mut d = draft();
        d.parties.plaintiffs.clear();
        assert!(matches!(
            validate_case_draft(&d),
            Err(LawdeskError::MissingField { .. })
        ));
    }

    #[test]
    fn test_patch_rejects_reopening_disposed_case() {
        let mut case = Case::from_draft("c1".to_string(), draft(), Utc::now());
        case.status = CaseStatus::Disposed;
        let result = validate_case_patch(&case, &CasePatch::status(CaseStatus::Active));
        assert!(matches!(
            result,
            Err(LawdeskError::IllegalStatusTransition { .. })
        ));
    }

    #[test]
    fn test_document_requires_uri() {
        let d = DocumentDraft {
            name: "Order.pdf".to_string(),
            uploaded_by: "1".to_string(),
            ..Default::default()
        };
        assert_eq!(
            validate_document_draft(&d),
            Err(LawdeskError::missing("Document", "uri"))
        );
    }
}
