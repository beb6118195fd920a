//! Plain-text and JSON rendering shared by the subcommands

use chrono::{DateTime, Utc};
use lawdesk_core::queries::{CaseDocument, CaseHearing};
use lawdesk_core::{AppNotification, Case, Clock, Party};
use serde::Serialize;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn local_time(instant: DateTime<Utc>, clock: &dyn Clock) -> String {
    clock.to_local(instant).format("%Y-%m-%d %H:%M").to_string()
}

fn party_names(parties: &[Party]) -> String {
    parties
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// "A, B vs C"
pub fn title(case: &Case) -> String {
    format!(
        "{} vs {}",
        party_names(&case.parties.plaintiffs),
        party_names(&case.parties.defendants)
    )
}

pub fn case_line(case: &Case) -> String {
    format!(
        "{}  {}  [{}]  {}  {}",
        case.id,
        case.case_number,
        case.status,
        case.court_name,
        title(case)
    )
}

pub fn hearing_line(entry: &CaseHearing, clock: &dyn Clock) -> String {
    format!(
        "{}  {} #{}  {}  {}",
        local_time(entry.hearing.date, clock),
        entry.case.case_number,
        entry.hearing.hearing_number,
        entry.hearing.court_order_type,
        entry.hearing.notes
    )
}

pub fn document_line(entry: &CaseDocument) -> String {
    format!(
        "{}  {}  {}  {}  ({} bytes)",
        entry.document.id,
        entry.case_number,
        entry.document.doc_type,
        entry.document.name,
        entry.document.size
    )
}

pub fn notification_line(n: &AppNotification, clock: &dyn Clock) -> String {
    let marker = if n.read { " " } else { "*" };
    format!(
        "{} {}  {}  {}: {}",
        marker,
        n.id,
        local_time(n.created_at, clock),
        n.title,
        n.message
    )
}

/// Print `items` as JSON or one line each, with `empty` when there are none
pub fn print_list<T, F>(
    items: &[T],
    json: bool,
    empty: &str,
    line: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    T: Serialize,
    F: Fn(&T) -> String,
{
    if json {
        return print_json(items);
    }
    if items.is_empty() {
        println!("{}", empty);
    }
    for item in items {
        println!("{}", line(item));
    }
    Ok(())
}
