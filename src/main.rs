//! # GermanFakeNC Crawler
//!
//! The GermanFakeNC dataset lists fake-news articles by URL only. This tool
//! follows those URLs to retrieve the article texts, and reports which news
//! sources the dataset draws from.
//!
//! ## Usage
//!
//! ```sh
//! gfnc crawl     # datasets/GermanFakeNC.json -> texts_/VALIDS_/INVALIDS_GermanFakeNC.json
//! gfnc sources   # distinct source domains of the VALIDS and INVALIDS files
//! ```
//!
//! ## Architecture
//!
//! 1. **Crawl**: Download every entry's URL one at a time and extract the
//!    title and body text; entries that fail are kept aside as INVALIDS
//! 2. **Output**: Write the extracted texts and both partitions as JSON
//! 3. **Sources**: Reduce each partition's URLs to their base domain and
//!    print the distinct set
//!
//! Logs go to stderr (`RUST_LOG` controls the level); the `sources` report
//! goes to stdout.

use clap::Parser;
use std::error::Error;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod crawl;
mod dataset;
mod models;
mod outputs;
mod scrapers;
mod sources;
mod utils;

use cli::{Cli, Command};
use config::{FileConfig, Settings, load_file_config};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();

    // Parse CLI
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let file_config = match &args.config {
        Some(path) => load_file_config(path).await?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(&args, file_config);
    info!(
        datasets_dir = %settings.paths.dir.display(),
        language = %settings.language,
        "gfnc starting up"
    );

    match args.command {
        Command::Crawl { .. } => {
            let report = crawl::run(&settings).await?;
            info!(
                valid = report.valid.len(),
                defective = report.defective.len(),
                "Crawl finished"
            );
        }
        Command::Sources { skip_unmatched } => {
            sources::run(&settings, skip_unmatched).await?;
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
