//! Daily digest
//!
//! A terminal has no platform notification service, so the digest is
//! delivered into the in-app notification list and echoed to stdout.

use clap::Args;
use lawdesk_core::{NotificationDraft, NotificationType};
use lawdesk_engine::reminders::send_daily_digest;
use lawdesk_engine::{NotificationLog, NotificationScheduler, ScheduledNotification, Workspace};
use lawdesk_store::errors::Result;

use super::output::print_json;

#[derive(Debug, Args)]
pub struct DigestArgs {
    #[arg(long)]
    pub json: bool,
}

/// Scheduler that files every request into the notification list
struct InboxScheduler<'a> {
    log: &'a NotificationLog,
}

impl NotificationScheduler for InboxScheduler<'_> {
    fn schedule(&self, notification: ScheduledNotification) -> Result<()> {
        let draft = NotificationDraft::new(
            NotificationType::System,
            notification.title,
            notification.body,
        )
        .with_data(notification.data);
        self.log.add(draft)?;
        Ok(())
    }
}

pub fn execute(
    workspace: &Workspace,
    args: DigestArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let inbox = InboxScheduler {
        log: &workspace.notifications,
    };
    let digest = send_daily_digest(&workspace.cases, &inbox)?;
    if args.json {
        return print_json(&digest);
    }
    println!("{}: {}", digest.title, digest.body);
    Ok(())
}
