//! Hearing commands
//!
//! Usage: lawdesk hearings <today|tomorrow|upcoming|past|add>

use chrono::{DateTime, Utc};
use clap::{Args, Subcommand, ValueEnum};
use lawdesk_core::{CourtOrderType, HearingDraft};
use lawdesk_engine::Workspace;

use super::output::{hearing_line, local_time, print_list};

#[derive(Debug, Args)]
pub struct HearingsArgs {
    #[command(subcommand)]
    pub command: HearingsCommand,
}

#[derive(Debug, Subcommand)]
pub enum HearingsCommand {
    /// Hearings on today's local date
    Today(ViewArgs),
    /// Hearings on tomorrow's local date
    Tomorrow(ViewArgs),
    /// Hearings after tomorrow
    Upcoming(ViewArgs),
    /// Hearings already held
    Past(ViewArgs),
    /// Schedule a hearing for a case
    Add(AddArgs),
}

#[derive(Debug, Args)]
pub struct ViewArgs {
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OrderArg {
    Evidence,
    Cross,
    Adjournment,
    Arguments,
    Judgment,
}

impl From<OrderArg> for CourtOrderType {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Evidence => CourtOrderType::Evidence,
            OrderArg::Cross => CourtOrderType::Cross,
            OrderArg::Adjournment => CourtOrderType::Adjournment,
            OrderArg::Arguments => CourtOrderType::Arguments,
            OrderArg::Judgment => CourtOrderType::Judgment,
        }
    }
}

#[derive(Debug, Args)]
pub struct AddArgs {
    pub case_id: String,

    /// RFC 3339 instant, e.g. 2024-02-01T10:00:00+05:00
    #[arg(long)]
    pub date: DateTime<Utc>,

    #[arg(long)]
    pub notes: String,

    #[arg(long, value_enum, default_value = "evidence")]
    pub order: OrderArg,
}

pub fn execute(
    workspace: &Workspace,
    args: HearingsArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = &workspace.cases;
    let clock = repo.clock();
    let (entries, view) = match args.command {
        HearingsCommand::Today(view) => (repo.today_hearings(), view),
        HearingsCommand::Tomorrow(view) => (repo.tomorrow_hearings(), view),
        HearingsCommand::Upcoming(view) => (repo.upcoming_hearings(), view),
        HearingsCommand::Past(view) => (repo.past_hearings(), view),
        HearingsCommand::Add(add) => {
            let draft = HearingDraft::new(add.date, add.notes).with_order_type(add.order.into());
            let hearing = repo.add_hearing(&add.case_id, draft)?;
            println!("Hearing scheduled:");
            println!("  id: {}", hearing.id);
            println!("  hearing_number: {}", hearing.hearing_number);
            println!("  date: {}", local_time(hearing.date, clock));
            return Ok(());
        }
    };
    print_list(&entries, view.json, "No hearings.", |entry| {
        hearing_line(entry, clock)
    })
}
