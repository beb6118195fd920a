//! Document search
//!
//! Usage: lawdesk documents search [QUERY] [--type T]

use clap::{Args, Subcommand};
use lawdesk_core::DocumentType;
use lawdesk_engine::Workspace;

use super::output::{document_line, print_list};

#[derive(Debug, Args)]
pub struct DocumentsArgs {
    #[command(subcommand)]
    pub command: DocumentsCommand,
}

#[derive(Debug, Subcommand)]
pub enum DocumentsCommand {
    /// Search document names and case numbers, newest first
    Search(SearchArgs),
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Blank matches every document
    #[arg(default_value = "")]
    pub query: String,

    #[arg(long = "type")]
    pub doc_type: Option<DocumentType>,

    #[arg(long)]
    pub json: bool,
}

pub fn execute(
    workspace: &Workspace,
    args: DocumentsArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        DocumentsCommand::Search(search) => {
            let found = workspace
                .cases
                .search_documents(&search.query, search.doc_type);
            print_list(&found, search.json, "No documents.", document_line)
        }
    }
}
