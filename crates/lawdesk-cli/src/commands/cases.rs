//! Case commands
//!
//! Usage: lawdesk cases <list|search|show|add|delete|status>

use std::path::PathBuf;

use clap::{Args, Subcommand};
use lawdesk_core::{Case, CaseDraft, CaseStatus, Clock};
use lawdesk_engine::Workspace;

use super::output::{case_line, local_time, print_json, print_list, title};

#[derive(Debug, Args)]
pub struct CasesArgs {
    #[command(subcommand)]
    pub command: CasesCommand,
}

#[derive(Debug, Subcommand)]
pub enum CasesCommand {
    /// List cases, optionally filtered by status
    List {
        #[arg(long)]
        status: Option<CaseStatus>,
        #[arg(long)]
        json: bool,
    },
    /// Search case numbers and party names
    Search {
        query: String,
        #[arg(long)]
        json: bool,
    },
    /// Show one case with its hearings and documents
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Create a case from a JSON draft file
    Add {
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Delete a case with all of its hearings and documents
    Delete { id: String },
    /// Move a case to another status
    Status { id: String, status: CaseStatus },
}

pub fn execute(workspace: &Workspace, args: CasesArgs) -> Result<(), Box<dyn std::error::Error>> {
    let repo = &workspace.cases;
    match args.command {
        CasesCommand::List { status, json } => {
            let cases = match status {
                Some(status) => repo.by_status(status),
                None => repo.list(),
            };
            print_list(&cases, json, "No cases.", case_line)
        }
        CasesCommand::Search { query, json } => {
            print_list(&repo.search(&query), json, "No matching cases.", case_line)
        }
        CasesCommand::Show { id, json } => {
            let case = repo.get(&id)?;
            if json {
                print_json(&case)
            } else {
                print_case(&case, repo.clock());
                Ok(())
            }
        }
        CasesCommand::Add { file, json } => {
            let content = std::fs::read_to_string(&file)?;
            let draft: CaseDraft = serde_json::from_str(&content)?;
            let case = repo.create(draft)?;
            if json {
                print_json(&case)
            } else {
                println!("Case created:");
                println!("  id: {}", case.id);
                println!("  case_number: {}", case.case_number);
                Ok(())
            }
        }
        CasesCommand::Delete { id } => {
            let case = repo.delete(&id)?;
            println!(
                "Deleted {} with {} hearing(s) and {} document(s)",
                case.case_number,
                case.hearings.len(),
                case.documents.len()
            );
            Ok(())
        }
        CasesCommand::Status { id, status } => {
            let case = repo.set_status(&id, status)?;
            println!("{} is now {}", case.case_number, case.status);
            Ok(())
        }
    }
}

fn print_case(case: &Case, clock: &dyn Clock) {
    println!("{}  {}", case.case_number, title(case));
    println!("  id: {}", case.id);
    println!("  court: {}", case.court_name);
    println!("  status: {}", case.status);
    println!("  assigned lawyer: {}", case.assigned_lawyer_id);
    if !case.opponent_lawyers.is_empty() {
        println!("  opponent lawyers: {}", case.opponent_lawyers.join(", "));
    }
    println!("  hearings: {}", case.hearings.len());
    for hearing in &case.hearings {
        println!(
            "    #{}  {}  {}  {}",
            hearing.hearing_number,
            local_time(hearing.date, clock),
            hearing.court_order_type,
            hearing.notes
        );
    }
    println!("  documents: {}", case.documents.len());
    for document in &case.documents {
        println!(
            "    {}  {}  {}",
            document.id, document.doc_type, document.name
        );
    }
}
