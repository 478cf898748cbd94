// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap and build the Config
// 2. Fetch the syllabus, discover the course pages and plan the downloads
// 3. Download everything concurrently, printing each outcome as it finishes
// 4. Exit with proper code (0 = success, 1 = some downloads failed, 2 = error)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod canvas;    // src/canvas/ - Canvas API client
mod cli;       // src/cli.rs - command-line parsing
mod config;    // src/config.rs - run configuration
mod error;     // src/error.rs - error types
mod fetch;     // src/fetch/ - concurrent downloads
mod links;     // src/links/ - HTML link extraction and slugs
mod logging;   // src/logging.rs - tracing setup
mod pipeline;  // src/pipeline.rs - syllabus -> pages -> download plan
mod plan;      // src/plan.rs - per-page download planning
mod report;    // src/report.rs - outcome printing

use std::pin::pin;

use anyhow::{Context, Result};
use clap::Parser;
use futures::StreamExt;

use canvas::CanvasClient;
use cli::Cli;
use config::Config;
use report::Reporter;

#[tokio::main]
async fn main() {
    logging::init_logging();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = every file downloaded or skipped
//   Ok(1) = at least one download failed
//   Err = nothing could be planned (bad config, auth failure, no syllabus, ...)
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;

    tracing::info!(
        base_url = %config.base_url,
        course_id = %config.course_id,
        "🔍 Scanning course syllabus"
    );

    let client = CanvasClient::new(&config).context("could not create the HTTP client")?;

    let discovery = pipeline::build_plans(&client, &config)
        .await
        .context("could not build the download plan")?;

    tracing::info!(
        pages = discovery.pages_found,
        failed_pages = discovery.pages_failed,
        files = discovery.plans.len(),
        "🌐 Starting downloads"
    );

    let mut reporter = Reporter::new(cli.json);
    let stdout = std::io::stdout();

    let mut outcomes = pin!(fetch::execute_fetches(
        &client,
        discovery.plans,
        &config.base_url,
        config.fetch_options(),
    ));

    while let Some(outcome) = outcomes.next().await {
        reporter.record(&outcome, &mut stdout.lock())?;
    }

    reporter.print_summary();

    Ok(reporter.exit_code())
}
