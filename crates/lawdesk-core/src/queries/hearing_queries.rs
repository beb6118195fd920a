use chrono::NaiveDate;
use serde::Serialize;

use crate::clock::Clock;
use crate::model::{Case, Hearing};

/// A hearing paired with the case that owns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseHearing {
    pub case: Case,
    pub hearing: Hearing,
}

fn collect<F>(cases: &[Case], keep: F) -> Vec<CaseHearing>
where
    F: Fn(&Hearing) -> bool,
{
    let keep = &keep;
    let mut out: Vec<CaseHearing> = cases
        .iter()
        .flat_map(|case| {
            case.hearings
                .iter()
                .filter(move |h| keep(h))
                .map(move |h| CaseHearing {
                    case: case.clone(),
                    hearing: h.clone(),
                })
        })
        .collect();
    out.sort_by_key(|entry| entry.hearing.date);
    out
}

/// Every hearing across all cases, earliest first
pub fn all_hearings(cases: &[Case]) -> Vec<CaseHearing> {
    collect(cases, |_| true)
}

/// Hearings falling on local calendar day `day`
///
/// Matching is by calendar-day equality in the clock's local time, not a
/// 24h window.
pub fn hearings_on(cases: &[Case], day: NaiveDate, clock: &dyn Clock) -> Vec<CaseHearing> {
    collect(cases, |h| clock.local_date(h.date) == day)
}

pub fn today_hearings(cases: &[Case], clock: &dyn Clock) -> Vec<CaseHearing> {
    hearings_on(cases, clock.today(), clock)
}

pub fn tomorrow_hearings(cases: &[Case], clock: &dyn Clock) -> Vec<CaseHearing> {
    match clock.today().succ_opt() {
        Some(tomorrow) => hearings_on(cases, tomorrow, clock),
        None => Vec::new(),
    }
}

/// Hearings on any day after tomorrow
pub fn upcoming_hearings(cases: &[Case], clock: &dyn Clock) -> Vec<CaseHearing> {
    let today = clock.today();
    collect(cases, |h| {
        clock
            .local_date(h.date)
            .signed_duration_since(today)
            .num_days()
            > 1
    })
}

/// Hearings on any day before today
pub fn past_hearings(cases: &[Case], clock: &dyn Clock) -> Vec<CaseHearing> {
    let today = clock.today();
    collect(cases, |h| clock.local_date(h.date) < today)
}
