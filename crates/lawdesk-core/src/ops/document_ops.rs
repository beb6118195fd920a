use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::casebook::CaseBook;
use crate::errors::{LawdeskError, Result};
use crate::model::document::{normalize_tags, DEFAULT_MIME_TYPE};
use crate::model::{Document, DocumentDraft};
use crate::rules::validate_document_draft;

/// Attach a document record to a case
///
/// # Errors
/// * `CaseNotFound` - no case with this id
/// * `HearingNotFound` - `hearingId` given but not a hearing of this case
/// * `MissingField` - blank name, uri or uploader
pub fn add_document(
    book: &mut CaseBook,
    case_id: &str,
    draft: DocumentDraft,
    now: DateTime<Utc>,
) -> Result<Document> {
    let case = book.get_case_mut(case_id)?;
    validate_document_draft(&draft)?;

    if let Some(hearing_id) = &draft.hearing_id {
        if case.hearing(hearing_id).is_none() {
            return Err(LawdeskError::HearingNotFound {
                case_id: case_id.to_string(),
                hearing_id: hearing_id.clone(),
            });
        }
    }

    let mime_type = match draft.mime_type.trim() {
        "" => DEFAULT_MIME_TYPE.to_string(),
        other => other.to_string(),
    };

    let document = Document {
        id: Uuid::now_v7().to_string(),
        name: draft.name.trim().to_string(),
        doc_type: draft.doc_type,
        uri: draft.uri,
        size: draft.size,
        mime_type,
        case_id: case.id.clone(),
        hearing_id: draft.hearing_id,
        uploaded_by: draft.uploaded_by,
        uploaded_at: now,
        tags: normalize_tags(draft.tags),
    };

    case.documents.push(document.clone());
    case.touch(now);

    Ok(document)
}

/// Remove a document record from its case
///
/// # Errors
/// * `CaseNotFound` / `DocumentNotFound` - unknown ids
pub fn delete_document(
    book: &mut CaseBook,
    case_id: &str,
    document_id: &str,
    now: DateTime<Utc>,
) -> Result<Document> {
    let case = book.get_case_mut(case_id)?;
    let index = case
        .documents
        .iter()
        .position(|d| d.id == document_id)
        .ok_or_else(|| LawdeskError::DocumentNotFound {
            case_id: case_id.to_string(),
            document_id: document_id.to_string(),
        })?;

    let removed = case.documents.remove(index);
    case.touch(now);
    Ok(removed)
}
