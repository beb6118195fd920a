//! Reminder delivery through an external notification scheduler

use std::sync::Arc;

use chrono::{DateTime, Utc};
use lawdesk_core::reminders::plan_hearing_reminders;
use lawdesk_core::{Case, Clock, Hearing, HearingObserver};
use lawdesk_store::errors::Result;
use serde::Serialize;
use serde_json::json;

use crate::case_repository::CaseRepository;

pub const DAILY_DIGEST_TITLE: &str = "Daily Digest";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "at")]
pub enum Trigger {
    At(DateTime<Utc>),
    Immediate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledNotification {
    pub title: String,
    pub body: String,
    pub data: serde_json::Value,
    pub trigger: Trigger,
}

/// Platform service that delivers notifications
pub trait NotificationScheduler: Send + Sync {
    /// Queue a notification
    ///
    /// # Errors
    ///
    /// `ERR_EXTERNAL_SERVICE` when the platform refuses the request.
    fn schedule(&self, notification: ScheduledNotification) -> Result<()>;
}

/// Hearing observer that turns new and edited hearings into reminders
///
/// The scheduler has no cancel operation, so editing a hearing queues a
/// fresh set of reminders while the ones planned for its old date remain
/// queued.
pub struct ReminderObserver {
    scheduler: Arc<dyn NotificationScheduler>,
    clock: Arc<dyn Clock>,
}

impl ReminderObserver {
    pub fn new(scheduler: Arc<dyn NotificationScheduler>, clock: Arc<dyn Clock>) -> Self {
        Self { scheduler, clock }
    }

    fn schedule_for(&self, case: &Case, hearing: &Hearing) {
        let plans = plan_hearing_reminders(hearing, &case.case_number, self.clock.as_ref());
        for plan in plans {
            let request = ScheduledNotification {
                title: plan.title,
                body: plan.body,
                data: plan.data,
                trigger: Trigger::At(plan.fire_at),
            };
            if let Err(e) = self.scheduler.schedule(request) {
                tracing::warn!(
                    hearing_id = %hearing.id,
                    err_code = e.code(),
                    error = %e,
                    "could not schedule hearing reminder"
                );
            }
        }
    }
}

impl HearingObserver for ReminderObserver {
    fn on_hearing_created(&self, case: &Case, hearing: &Hearing) {
        self.schedule_for(case, hearing);
    }

    fn on_hearing_updated(&self, case: &Case, hearing: &Hearing) {
        self.schedule_for(case, hearing);
    }
}

/// Send an immediate summary of today's and tomorrow's hearings
///
/// # Errors
///
/// The scheduler refused the notification.
pub fn send_daily_digest(
    repo: &CaseRepository,
    scheduler: &dyn NotificationScheduler,
) -> Result<ScheduledNotification> {
    let today = repo.today_hearings().len();
    let tomorrow = repo.tomorrow_hearings().len();
    let digest = ScheduledNotification {
        title: DAILY_DIGEST_TITLE.to_string(),
        body: format!(
            "You have {} hearing(s) today and {} tomorrow",
            today, tomorrow
        ),
        data: json!({ "type": "daily_digest", "today": today, "tomorrow": tomorrow }),
        trigger: Trigger::Immediate,
    };
    scheduler.schedule(digest.clone())?;
    tracing::debug!(today, tomorrow, "daily digest sent");
    Ok(digest)
}
