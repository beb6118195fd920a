//! Lawdesk CLI
//!
//! Command-line front end over a local Lawdesk data directory

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lawdesk_core::logging_facility;
use lawdesk_engine::config::{LawdeskConfig, ENV_DATA_DIR};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "lawdesk")]
#[command(about = "Lawdesk - Case, hearing and document management for law practices", long_about = None)]
struct Cli {
    /// Configuration file (defaults apply when it does not exist)
    #[arg(long, global = true, env = "LAWDESK_CONFIG", default_value = "lawdesk.toml")]
    config: PathBuf,

    /// Data directory, overriding the configuration
    #[arg(long, global = true, env = ENV_DATA_DIR)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Case operations
    Cases(commands::cases::CasesArgs),
    /// Hearing views and scheduling
    Hearings(commands::hearings::HearingsArgs),
    /// Document search
    Documents(commands::documents::DocumentsArgs),
    /// Dashboard counters
    Stats(commands::stats::StatsArgs),
    /// Practice-wide report
    Report(commands::stats::ReportArgs),
    /// Log in with email and password, or biometrics
    Login(commands::session::LoginArgs),
    /// End the current session
    Logout,
    /// Show the logged-in user
    Whoami(commands::session::WhoamiArgs),
    /// In-app notification list
    Notifications(commands::notifications::NotificationsArgs),
    /// Summarize today's and tomorrow's hearings into the notification list
    Digest(commands::digest::DigestArgs),
}

fn load_config(cli: &Cli) -> Result<LawdeskConfig, Box<dyn std::error::Error>> {
    let mut config = LawdeskConfig::load(&cli.config)?.with_env_overrides();
    if let Some(dir) = &cli.data_dir {
        config.storage.data_dir = dir.clone();
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&cli)?;
    logging_facility::init(config.log_profile()?);
    tracing::debug!(data_dir = %config.storage.data_dir.display(), "opening workspace");

    let workspace = commands::open_workspace(&config);

    match cli.command {
        Commands::Cases(args) => commands::cases::execute(&workspace, args),
        Commands::Hearings(args) => commands::hearings::execute(&workspace, args),
        Commands::Documents(args) => commands::documents::execute(&workspace, args),
        Commands::Stats(args) => commands::stats::execute_stats(&workspace, args),
        Commands::Report(args) => commands::stats::execute_report(&workspace, args),
        Commands::Login(args) => commands::session::execute_login(&workspace, args),
        Commands::Logout => commands::session::execute_logout(&workspace),
        Commands::Whoami(args) => commands::session::execute_whoami(&workspace, args),
        Commands::Notifications(args) => commands::notifications::execute(&workspace, args),
        Commands::Digest(args) => commands::digest::execute(&workspace, args),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
