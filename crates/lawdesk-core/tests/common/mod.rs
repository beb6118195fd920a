use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use lawdesk_core::ops::case_ops;
use lawdesk_core::{CaseBook, Clock, CaseDraft, CaseParties, DocumentDraft, DocumentType, Party};

/// Parse an RFC 3339 instant
#[allow(dead_code)]
pub fn at(instant: &str) -> DateTime<Utc> {
    instant.parse().expect("valid RFC 3339 instant")
}

/// A draft that passes validation
#[allow(dead_code)]
pub fn case_draft(case_number: &str) -> CaseDraft {
    CaseDraft {
        case_number: case_number.to_string(),
        parties: CaseParties {
            plaintiffs: vec![Party::new("Plaintiff")],
            defendants: vec![Party::new("Defendant")],
        },
        assigned_lawyer_id: "1".to_string(),
        created_by: "1".to_string(),
        team_id: "team1".to_string(),
        ..Default::default()
    }
}

/// Create a case through the real operation and return its id
#[allow(dead_code)]
pub fn create_test_case(book: &mut CaseBook, case_number: &str) -> String {
    case_ops::create_case(book, case_draft(case_number), at("2024-01-15T00:00:00Z"))
        .expect("Should create case")
        .id
}

#[allow(dead_code)]
pub fn document_draft(name: &str) -> DocumentDraft {
    DocumentDraft {
        name: name.to_string(),
        doc_type: DocumentType::Evidence,
        uri: format!("file://documents/{}", name),
        size: 2048,
        mime_type: "application/pdf".to_string(),
        uploaded_by: "1".to_string(),
        ..Default::default()
    }
}

/// Clock whose local offset changes at `switch_at`, like a DST transition
#[allow(dead_code)]
pub struct ShiftingClock {
    pub now: DateTime<Utc>,
    pub switch_at: DateTime<Utc>,
    pub before: FixedOffset,
    pub after: FixedOffset,
}

#[allow(dead_code)]
impl ShiftingClock {
    /// America/New_York around the 2024-11-03 fall-back (EDT to EST)
    pub fn new_york_fall_back(now: DateTime<Utc>) -> Self {
        Self {
            now,
            switch_at: at("2024-11-03T06:00:00Z"),
            before: FixedOffset::west_opt(4 * 3600).expect("valid offset"),
            after: FixedOffset::west_opt(5 * 3600).expect("valid offset"),
        }
    }

    fn offset_at(&self, instant: DateTime<Utc>) -> FixedOffset {
        if instant < self.switch_at {
            self.before
        } else {
            self.after
        }
    }
}

impl Clock for ShiftingClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn to_local(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.with_timezone(&self.offset_at(instant)).naive_local()
    }

    fn from_local(&self, local: NaiveDateTime) -> Option<DateTime<Utc>> {
        // Try the earlier offset first, keep whichever reading is consistent
        [self.before, self.after].into_iter().find_map(|offset| {
            let instant = offset.from_local_datetime(&local).single()?.with_timezone(&Utc);
            (self.offset_at(instant) == offset).then_some(instant)
        })
    }
}
