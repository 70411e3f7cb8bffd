//! Entry-level IT support job notifier
//!
//! Searches Indeed for every configured target and posts each posting found
//! to the target's Discord webhook. Meant to be run on a schedule.

use std::process::ExitCode;

use clap::Parser;
use helpdesk_scraper::cli::Cli;
use helpdesk_scraper::{load_targets, logging, BlockingTransport, Fetcher, Pipeline, Publisher};
use tracing::{error, info};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();
    info!("🔍 Starting helpdesk job scraper...");

    let targets = match load_targets(&cli.config_source()) {
        Ok(targets) => targets,
        Err(e) => {
            error!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    let transport = match BlockingTransport::new() {
        Ok(transport) => transport,
        Err(e) => {
            error!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };
    let pipeline = Pipeline::new(
        Fetcher::new(transport.clone()),
        Publisher::new(transport),
        cli.extract_mode(),
    );

    match pipeline.run(&targets) {
        Ok(reports) => {
            let total: usize = reports.iter().map(|r| r.postings).sum();
            info!("✨ Done: {} postings across {} target(s)", total, reports.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
