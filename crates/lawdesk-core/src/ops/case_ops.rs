use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::casebook::CaseBook;
use crate::errors::Result;
use crate::model::{Case, CaseDraft, CasePatch, CaseStatus};
use crate::rules::{validate_case_draft, validate_case_patch};

/// Create a new case from a draft
///
/// Generates a UUID v7 id, stamps `createdAt`/`updatedAt` with `now`,
/// assigns ids to parties that have none, and appends the case.
///
/// # Errors
/// * `MissingField` / `InvalidField` - the draft failed validation
pub fn create_case(book: &mut CaseBook, draft: CaseDraft, now: DateTime<Utc>) -> Result<Case> {
    validate_case_draft(&draft)?;

    let mut draft = draft;
    draft.opponent_lawyers = trim_all(draft.opponent_lawyers);

    let case = Case::from_draft(Uuid::now_v7().to_string(), draft, now);
    book.insert_case(case.clone());

    Ok(case)
}

/// Apply a partial update to a case
///
/// Only the fields present in the patch change. `updatedAt` is refreshed
/// even for an empty patch.
///
/// # Errors
/// * `CaseNotFound` - no case with this id
/// * `MissingField` / `InvalidField` - a provided field failed validation
/// * `IllegalStatusTransition` - status change not allowed
pub fn update_case(
    book: &mut CaseBook,
    id: &str,
    patch: CasePatch,
    now: DateTime<Utc>,
) -> Result<Case> {
    let case = book.get_case_mut(id)?;
    validate_case_patch(case, &patch)?;

    if let Some(number) = patch.case_number {
        case.case_number = number.trim().to_string();
    }
    if let Some(court) = patch.court_name {
        case.court_name = court;
    }
    if let Some(mut parties) = patch.parties {
        parties.ensure_ids();
        case.parties = parties;
    }
    if let Some(lawyers) = patch.opponent_lawyers {
        case.opponent_lawyers = trim_all(lawyers);
    }
    if let Some(sections) = patch.legal_sections {
        case.legal_sections = sections;
    }
    if let Some(lawyer) = patch.assigned_lawyer_id {
        case.assigned_lawyer_id = lawyer;
    }
    if let Some(team) = patch.team_id {
        case.team_id = team;
    }
    if let Some(status) = patch.status {
        case.status = status;
    }

    case.touch(now);
    Ok(case.clone())
}

/// Move a case to a new status through the transition guard
///
/// # Errors
/// * `CaseNotFound` - no case with this id
/// * `IllegalStatusTransition` - `status` not reachable from the current one
pub fn set_status(
    book: &mut CaseBook,
    id: &str,
    status: CaseStatus,
    now: DateTime<Utc>,
) -> Result<Case> {
    update_case(book, id, CasePatch::status(status), now)
}

/// Delete a case and, with it, all of its hearings and documents
///
/// Returns the removed case so callers can report what went with it.
///
/// # Errors
/// * `CaseNotFound` - no case with this id
pub fn delete_case(book: &mut CaseBook, id: &str) -> Result<Case> {
    let removed = book.remove_case(id)?;
    tracing::debug!(
        case_id = %removed.id,
        hearings = removed.hearings.len(),
        documents = removed.documents.len(),
        "case removed with owned records"
    );
    Ok(removed)
}

fn trim_all(values: Vec<String>) -> Vec<String> {
    values.into_iter().map(|v| v.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LawdeskError;
    use crate::model::{CaseParties, CourtName, Party};

    fn draft(number: &str) -> CaseDraft {
        CaseDraft {
            case_number: number.to_string(),
            court_name: CourtName::HighCourt,
            parties: CaseParties {
                plaintiffs: vec![Party::new("ABC Corporation Ltd.")],
                defendants: vec![Party::new("XYZ Industries")],
            },
            opponent_lawyers: vec![" Advocate Tariq Mahmood ".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_create_stamps_identity() {
        let mut book = CaseBook::new();
        let now = Utc::now();
        let case = create_case(&mut book, draft("CIV/2024/001"), now).unwrap();

        assert!(!case.id.is_empty());
        assert_eq!(case.created_at, now);
        assert_eq!(case.updated_at, now);
        assert_eq!(case.opponent_lawyers, vec!["Advocate Tariq Mahmood"]);
        assert_eq!(book.get_case(&case.id).unwrap(), &case);
    }

    #[test]
    fn test_create_rejects_invalid_draft_without_mutation() {
        let mut book = CaseBook::new();
        let result = create_case(&mut book, draft(""), Utc::now());
        assert!(matches!(result, Err(LawdeskError::MissingField { .. })));
        assert!(book.is_empty());
    }

    #[test]
    fn test_update_only_touches_patched_fields() {
        let mut book = CaseBook::new();
        let t0 = Utc::now();
        let case = create_case(&mut book, draft("CIV/2024/001"), t0).unwrap();

        let t1 = t0 + chrono::Duration::minutes(5);
        let patch = CasePatch {
            court_name: Some(CourtName::SupremeCourt),
            ..Default::default()
        };
        let updated = update_case(&mut book, &case.id, patch, t1).unwrap();

        assert_eq!(updated.court_name, CourtName::SupremeCourt);
        assert_eq!(updated.case_number, "CIV/2024/001");
        assert_eq!(updated.parties, case.parties);
        assert_eq!(updated.created_at, t0);
        assert_eq!(updated.updated_at, t1);
    }

    #[test]
    fn test_update_unknown_case() {
        let mut book = CaseBook::new();
        let result = update_case(&mut book, "ghost", CasePatch::default(), Utc::now());
        assert_eq!(
            result,
            Err(LawdeskError::CaseNotFound {
                case_id: "ghost".to_string()
            })
        );
    }

    #[test]
    fn test_disposed_is_terminal() {
        let mut book = CaseBook::new();
        let now = Utc::now();
        let case = create_case(&mut book, draft("CRM/2024/002"), now).unwrap();

        set_status(&mut book, &case.id, CaseStatus::Disposed, now).unwrap();
        let result = set_status(&mut book, &case.id, CaseStatus::Active, now);

        assert!(matches!(
            result,
            Err(LawdeskError::IllegalStatusTransition {
                from: CaseStatus::Disposed,
                to: CaseStatus::Active,
                ..
            })
        ));
        assert_eq!(
            book.get_case(&case.id).unwrap().status,
            CaseStatus::Disposed
        );
    }

    #[test]
    fn test_delete_returns_removed_case() {
        let mut book = CaseBook::new();
        let case = create_case(&mut book, draft("CIV/2024/001"), Utc::now()).unwrap();

        let removed = delete_case(&mut book, &case.id).unwrap();
        assert_eq!(removed.id, case.id);
        assert!(book.is_empty());
        assert!(delete_case(&mut book, &case.id).is_err());
    }
}
