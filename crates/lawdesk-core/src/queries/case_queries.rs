use crate::model::{Case, CaseStatus};

/// Cases whose status equals `status`, in collection order
pub fn cases_by_status(cases: &[Case], status: CaseStatus) -> Vec<Case> {
    cases
        .iter()
        .filter(|c| c.status == status)
        .cloned()
        .collect()
}

/// Case-insensitive match on case number or any party name
///
/// A blank query matches every case.
pub fn search_cases(cases: &[Case], query: &str) -> Vec<Case> {
    let needle = query.trim().to_lowercase();
    cases
        .iter()
        .filter(|c| {
            needle.is_empty()
                || c.case_number.to_lowercase().contains(&needle)
                || c.parties.iter().any(|p| p.name_matches(&needle))
        })
        .cloned()
        .collect()
}
