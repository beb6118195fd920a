//! Reminder planning for scheduled hearings
//!
//! Planning is pure; delivering the reminders is the job of a scheduler
//! living outside the kernel.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use serde::Serialize;
use serde_json::json;

use crate::clock::Clock;
use crate::model::Hearing;

pub const DAY_BEFORE_TITLE: &str = "Hearing Reminder";
pub const HOUR_BEFORE_TITLE: &str = "Hearing Starting Soon";

/// Local time of day for the day-before reminder
const DAY_BEFORE_HOUR: u32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    DayBefore,
    HourBefore,
}

/// One reminder to deliver at `fire_at`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderPlan {
    pub kind: ReminderKind,
    pub title: String,
    pub body: String,
    pub fire_at: DateTime<Utc>,
    pub data: serde_json::Value,
}

/// Plan the reminders for `hearing`
///
/// Produces a reminder at 09:00 local time on the day before the hearing
/// and one an hour before it starts. The 09:00 is resolved with the local
/// offset in force on that day. Reminders whose time is not strictly after
/// the clock's `now` are dropped.
pub fn plan_hearing_reminders(
    hearing: &Hearing,
    case_number: &str,
    clock: &dyn Clock,
) -> Vec<ReminderPlan> {
    let now = clock.now();
    let data = json!({
        "type": "hearing_reminder",
        "hearingId": hearing.id,
        "caseId": hearing.case_id,
        "caseNumber": case_number,
    });

    let day_before = clock
        .local_date(hearing.date)
        .pred_opt()
        .and_then(|day| NaiveTime::from_hms_opt(DAY_BEFORE_HOUR, 0, 0).map(|t| day.and_time(t)))
        .and_then(|naive| clock.from_local(naive));

    let candidates = [
        day_before.map(|fire_at| ReminderPlan {
            kind: ReminderKind::DayBefore,
            title: DAY_BEFORE_TITLE.to_string(),
            body: format!("You have a hearing tomorrow for case {}", case_number),
            fire_at,
            data: data.clone(),
        }),
        Some(ReminderPlan {
            kind: ReminderKind::HourBefore,
            title: HOUR_BEFORE_TITLE.to_string(),
            body: format!("Your hearing for case {} starts in 1 hour", case_number),
            fire_at: hearing.date - Duration::hours(1),
            data,
        }),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter(|plan| plan.fire_at > now)
        .collect()
}
