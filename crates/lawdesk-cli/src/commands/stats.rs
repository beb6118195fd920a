//! Dashboard counters and the practice report

use clap::Args;
use lawdesk_engine::Workspace;

use super::output::print_json;

#[derive(Debug, Args)]
pub struct StatsArgs {
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[arg(long)]
    pub json: bool,
}

pub fn execute_stats(
    workspace: &Workspace,
    args: StatsArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let stats = workspace.cases.dashboard();
    if args.json {
        return print_json(&stats);
    }
    println!("Total cases:       {}", stats.total_cases);
    println!("Active cases:      {}", stats.active_cases);
    println!("Hearings today:    {}", stats.today_hearings);
    println!("Hearings tomorrow: {}", stats.tomorrow_hearings);
    println!("Pending approvals: {}", stats.pending_approvals);
    println!("Documents:         {}", stats.total_documents);
    Ok(())
}

pub fn execute_report(
    workspace: &Workspace,
    args: ReportArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = workspace.cases.report();
    if args.json {
        return print_json(&report);
    }
    println!(
        "Cases: {} (active {}, pending {}, adjourned {}, disposed {})",
        report.total_cases, report.active, report.pending, report.adjourned, report.disposed
    );
    println!("Hearings: {}", report.total_hearings);
    println!("Documents: {}", report.total_documents);
    if !report.courts.is_empty() {
        println!("By court:");
        for tally in &report.courts {
            println!(
                "  {}: {} total, {} active, {} disposed ({:.0}% disposed)",
                tally.court,
                tally.total,
                tally.active,
                tally.disposed,
                tally.disposal_rate() * 100.0
            );
        }
    }
    if !report.document_types.is_empty() {
        println!("By document type:");
        for (doc_type, count) in &report.document_types {
            println!("  {}: {}", doc_type, count);
        }
    }
    Ok(())
}
