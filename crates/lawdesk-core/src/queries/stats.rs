//! Dashboard counters and the case report

use std::collections::BTreeMap;

use serde::Serialize;

use super::hearing_queries::{today_hearings, tomorrow_hearings};
use crate::clock::Clock;
use crate::model::{Case, CaseStatus, CourtName, DocumentType};

/// Headline counters for the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_cases: usize,
    pub active_cases: usize,
    pub today_hearings: usize,
    pub tomorrow_hearings: usize,
    /// Cases sitting in `pending`
    pub pending_approvals: usize,
    pub total_documents: usize,
}

impl DashboardStats {
    pub fn compute(cases: &[Case], clock: &dyn Clock) -> Self {
        Self {
            total_cases: cases.len(),
            active_cases: count_status(cases, CaseStatus::Active),
            today_hearings: today_hearings(cases, clock).len(),
            tomorrow_hearings: tomorrow_hearings(cases, clock).len(),
            pending_approvals: count_status(cases, CaseStatus::Pending),
            total_documents: cases.iter().map(|c| c.documents.len()).sum(),
        }
    }
}

/// Per-court case counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtTally {
    pub court: CourtName,
    pub total: usize,
    pub active: usize,
    pub disposed: usize,
}

impl CourtTally {
    /// Share of this court's cases that are disposed, in `0.0..=1.0`
    pub fn disposal_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.disposed as f64 / self.total as f64
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseReport {
    pub total_cases: usize,
    pub active: usize,
    pub pending: usize,
    pub disposed: usize,
    pub adjourned: usize,
    pub total_hearings: usize,
    pub total_documents: usize,
    /// Only courts with at least one case, in court order
    pub courts: Vec<CourtTally>,
    pub document_types: BTreeMap<DocumentType, usize>,
}

impl CaseReport {
    pub fn compute(cases: &[Case]) -> Self {
        let mut courts: BTreeMap<CourtName, CourtTally> = BTreeMap::new();
        let mut document_types = BTreeMap::new();

        for case in cases {
            let tally = courts.entry(case.court_name).or_insert(CourtTally {
                court: case.court_name,
                total: 0,
                active: 0,
                disposed: 0,
            });
            tally.total += 1;
            match case.status {
                CaseStatus::Active => tally.active += 1,
                CaseStatus::Disposed => tally.disposed += 1,
                _ => {}
            }
            for doc in &case.documents {
                *document_types.entry(doc.doc_type).or_insert(0) += 1;
            }
        }

        Self {
            total_cases: cases.len(),
            active: count_status(cases, CaseStatus::Active),
            pending: count_status(cases, CaseStatus::Pending),
            disposed: count_status(cases, CaseStatus::Disposed),
            adjourned: count_status(cases, CaseStatus::Adjourned),
            total_hearings: cases.iter().map(|c| c.hearings.len()).sum(),
            total_documents: cases.iter().map(|c| c.documents.len()).sum(),
            courts: courts.into_values().collect(),
            document_types,
        }
    }
}

fn count_status(cases: &[Case], status: CaseStatus) -> usize {
    cases.iter().filter(|c| c.status == status).count()
}
