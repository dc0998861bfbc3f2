//! `cu-directory` — fetch, normalize, and display the Christian Union directory.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Resolve the API endpoint ([`config::resolve_endpoint`]) — fatal if absent.
//! 3. Fetch the raw payload ([`fetcher`]), one GET, no retries.
//! 4. Normalize and resolve records ([`pipeline`], [`normalizer`], [`resolver`]).
//! 5. Render the requested report ([`report`]).
//! 6. Exit `0` (directory shown, even if empty) or `1` (data unavailable).

mod cli;
mod config;
mod fetcher;
mod models;
mod normalizer;
mod pipeline;
mod report;
mod resolver;

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use cli::{Cli, ReportFormat};
use config::resolve_endpoint;
use pipeline::view_from_fetch;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Missing endpoint configuration is fatal, not a "data unavailable" view.
    let endpoint = resolve_endpoint(cli.endpoint.as_deref(), cli.config.as_deref())?;

    // Timeouts are a network-layer concern; the pipeline itself has none.
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(cli.timeout))
        .build()?;

    let spinner = if !cli.quiet && matches!(cli.report, ReportFormat::Terminal) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.set_message("Fetching unions…");
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let result = fetcher::fetch_payload(&client, &endpoint).await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let view = view_from_fetch(result);

    match cli.report {
        ReportFormat::Terminal => {
            report::terminal::render(&view, &endpoint, cli.verbose, cli.quiet)?;
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }

    if view.error.is_some() {
        std::process::exit(1);
    }

    Ok(())
}
