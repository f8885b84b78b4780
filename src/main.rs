// src/main.rs
// =============================================================================
// This is the entry point of the CLI application.
//
// What happens here:
// 1. Parse flags and prompt for anything missing (cli.rs)
// 2. Fetch the user's repositories (github/)
// 3. Normalize them into report rows (report/)
// 4. Render the charts, then write the spreadsheet that embeds them
//    (charts/, export/)
// 5. Print a summary and exit
//    (0 = success, 1 = GitHub request failed, 2 = any other error)
//
// Every stage runs once, in order, and finishes before the next one starts.
// =============================================================================

mod charts;
mod cli;
mod config;
mod error;
mod export;
mod github;
mod report;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use charts::ChartOutcome;
use cli::Cli;
use config::ReportConfig;
use error::ReportError;
use export::ExportOutcome;
use report::RepositorySummary;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_code_for(&e)
        }
    };

    std::process::exit(exit_code);
}

// Diagnostics go to stderr; RUST_LOG overrides the level
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn exit_code_for(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<ReportError>() {
        Some(e) if e.is_api_failure() => 1,
        _ => 2,
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli::config_from_terminal(cli)?;
    // One capture instant for the whole run
    let captured_at = Local::now();

    println!("🔍 Fetching repositories for {}...", config.username);
    let raw = github::fetch_user_repos(&config).await?;

    if raw.is_empty() {
        println!("⚠️  No repositories found for {}", config.username);
    } else {
        println!("📦 Found {} repositories", raw.len());
    }

    let rows = report::transform(&raw)?;

    match render_charts_or_warn(&rows, &config)? {
        Some(ChartOutcome::Rendered(paths)) => {
            println!("📊 {} charts saved to '{}'", paths.len(), config.charts_dir.display())
        }
        Some(ChartOutcome::NoData) => println!("⚠️  No data for analysis"),
        None => {}
    }

    match export::export_workbook(&rows, &config, captured_at)? {
        ExportOutcome::Written { path, images } => {
            println!("📄 Data and {} chart(s) saved to {}", images, path.display())
        }
        ExportOutcome::NoData => println!("⚠️  No data to save"),
    }

    print_summary(&config, RepositorySummary::from_rows(&rows));
    Ok(())
}

// The spreadsheet does not depend on the charts: a drawing failure or an
// unusable charts directory is reported and the run carries on, and the
// exporter then skips whichever images are missing
fn render_charts_or_warn(
    rows: &[report::RepositoryRow],
    config: &ReportConfig,
) -> error::Result<Option<ChartOutcome>> {
    match charts::render_charts(rows, config) {
        Ok(outcome) => Ok(Some(outcome)),
        Err(e @ (ReportError::Chart { .. } | ReportError::Io(_))) => {
            tracing::warn!(error = %e, "chart rendering failed");
            eprintln!("⚠️  Charts not rendered: {}", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn print_summary(config: &ReportConfig, summary: Option<RepositorySummary>) {
    println!();
    println!("📋 Summary for {}:", config.username);

    match summary {
        Some(summary) => {
            println!("   Total repositories: {}", summary.total);
            println!(
                "   Most starred repository: {} ({} stars)",
                summary.most_starred.0, summary.most_starred.1
            );
            println!(
                "   Most forked repository: {} ({} forks)",
                summary.most_forked.0, summary.most_forked.1
            );
            println!("   Most used language: {}", summary.top_language);
        }
        None => println!("   Total repositories: 0"),
    }
}
