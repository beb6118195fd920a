//! In-app notification list
//!
//! Usage: lawdesk notifications <list|read|clear>

use clap::{Args, Subcommand};
use lawdesk_engine::Workspace;

use super::output::{notification_line, print_json, print_list};

#[derive(Debug, Args)]
pub struct NotificationsArgs {
    #[command(subcommand)]
    pub command: NotificationsCommand,
}

#[derive(Debug, Subcommand)]
pub enum NotificationsCommand {
    /// Newest first; unread entries are starred
    List {
        #[arg(long)]
        json: bool,
    },
    /// Mark one notification as read
    Read {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Remove every notification
    Clear,
}

pub fn execute(
    workspace: &Workspace,
    args: NotificationsArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let log = &workspace.notifications;
    match args.command {
        NotificationsCommand::List { json } => {
            let clock = workspace.cases.clock();
            let entries = log.list();
            if !json && !entries.is_empty() {
                println!("{} unread", log.unread_count());
            }
            print_list(&entries, json, "No notifications.", |n| {
                notification_line(n, clock)
            })
        }
        NotificationsCommand::Read { id, json } => {
            let notification = log.mark_read(&id)?;
            if json {
                print_json(&notification)
            } else {
                println!("Marked {} as read", notification.id);
                Ok(())
            }
        }
        NotificationsCommand::Clear => {
            log.clear()?;
            println!("Notifications cleared");
            Ok(())
        }
    }
}
