use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::casebook::CaseBook;
use crate::errors::{LawdeskError, Result};
use crate::model::hearing::non_blank;
use crate::model::{Hearing, HearingDraft, HearingPatch};
use crate::rules::{validate_hearing_draft, validate_hearing_patch};

/// Schedule a hearing on a case
///
/// The hearing number is one more than the highest number already assigned
/// in the case. Numbers are never reused or renumbered, so after a deletion
/// the sequence may have gaps.
///
/// # Errors
/// * `CaseNotFound` - no case with this id
/// * `MissingField` - blank notes
/// * `InvalidField` - the case already holds hearing number `u32::MAX`
pub fn add_hearing(
    book: &mut CaseBook,
    case_id: &str,
    draft: HearingDraft,
    now: DateTime<Utc>,
) -> Result<Hearing> {
    let case = book.get_case_mut(case_id)?;
    validate_hearing_draft(&draft)?;

    let assigned_lawyer_id = draft
        .assigned_lawyer_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| case.assigned_lawyer_id.clone());

    let hearing_number = case
        .last_hearing_number()
        .checked_add(1)
        .ok_or_else(|| LawdeskError::invalid("hearingNumber", "no hearing numbers left in case"))?;

    let hearing = Hearing {
        id: Uuid::now_v7().to_string(),
        hearing_number,
        date: draft.date,
        court_order_type: draft.court_order_type,
        notes: draft.notes.trim().to_string(),
        assigned_lawyer_id,
        previous_comments: non_blank(draft.previous_comments),
        next_steps: non_blank(draft.next_steps),
        case_id: case.id.clone(),
        created_at: now,
        updated_at: now,
    };

    case.hearings.push(hearing.clone());
    case.touch(now);

    Ok(hearing)
}

/// Apply a partial update to a hearing; the hearing number is immutable
///
/// # Errors
/// * `CaseNotFound` / `HearingNotFound` - unknown ids
/// * `MissingField` - notes provided but blank
pub fn update_hearing(
    book: &mut CaseBook,
    case_id: &str,
    hearing_id: &str,
    patch: HearingPatch,
    now: DateTime<Utc>,
) -> Result<Hearing> {
    let case = book.get_case_mut(case_id)?;
    validate_hearing_patch(&patch)?;

    let hearing = case
        .hearings
        .iter_mut()
        .find(|h| h.id == hearing_id)
        .ok_or_else(|| LawdeskError::HearingNotFound {
            case_id: case_id.to_string(),
            hearing_id: hearing_id.to_string(),
        })?;

    if let Some(date) = patch.date {
        hearing.date = date;
    }
    if let Some(order) = patch.court_order_type {
        hearing.court_order_type = order;
    }
    if let Some(notes) = patch.notes {
        hearing.notes = notes.trim().to_string();
    }
    if patch.previous_comments.is_some() {
        hearing.previous_comments = non_blank(patch.previous_comments);
    }
    if patch.next_steps.is_some() {
        hearing.next_steps = non_blank(patch.next_steps);
    }
    hearing.updated_at = now;

    let updated = hearing.clone();
    case.touch(now);
    Ok(updated)
}

/// Remove a hearing from its case
///
/// Documents that pointed at the hearing stay with the case but lose their
/// `hearingId`.
///
/// # Errors
/// * `CaseNotFound` / `HearingNotFound` - unknown ids
pub fn delete_hearing(
    book: &mut CaseBook,
    case_id: &str,
    hearing_id: &str,
    now: DateTime<Utc>,
) -> Result<Hearing> {
    let case = book.get_case_mut(case_id)?;
    let index = case
        .hearings
        .iter()
        .position(|h| h.id == hearing_id)
        .ok_or_else(|| LawdeskError::HearingNotFound {
            case_id: case_id.to_string(),
            hearing_id: hearing_id.to_string(),
        })?;

    let removed = case.hearings.remove(index);
    for document in case
        .documents
        .iter_mut()
        .filter(|d| d.hearing_id.as_deref() == Some(hearing_id))
    {
        document.hearing_id = None;
    }
    case.touch(now);

    Ok(removed)
}
