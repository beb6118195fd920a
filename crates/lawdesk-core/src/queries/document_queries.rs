use serde::Serialize;

use crate::model::{Case, Document, DocumentType};

/// A document together with the number of the case it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseDocument {
    pub case_number: String,
    pub document: Document,
}

/// Documents whose name or owning case number contains `query`
/// (case-insensitive), optionally restricted to one type, newest upload
/// first
pub fn search_documents(
    cases: &[Case],
    query: &str,
    doc_type: Option<DocumentType>,
) -> Vec<CaseDocument> {
    let needle = query.trim().to_lowercase();
    let mut out: Vec<CaseDocument> = cases
        .iter()
        .flat_map(|case| {
            let case_hit = case.case_number.to_lowercase().contains(&needle);
            let needle = needle.clone();
            case.documents
                .iter()
                .filter(move |d| case_hit || d.name.to_lowercase().contains(&needle))
                .filter(move |d| doc_type.map_or(true, |t| d.doc_type == t))
                .map(move |d| CaseDocument {
                    case_number: case.case_number.clone(),
                    document: d.clone(),
                })
        })
        .collect();
    out.sort_by(|a, b| b.document.uploaded_at.cmp(&a.document.uploaded_at));
    out
}
