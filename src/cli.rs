//! Command-line interface definitions for the GermanFakeNC crawler.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Running either subcommand without flags uses the default dataset layout
//! under `./datasets`.

use crate::scrapers::language::Language;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Command-line arguments for the GermanFakeNC crawler.
///
/// # Examples
///
/// ```sh
/// # Fetch every article listed in datasets/GermanFakeNC.json
/// gfnc crawl
///
/// # Summarize the sources of the VALIDS/INVALIDS files
/// gfnc sources
///
/// # Use another dataset directory and keep going past unusable URLs
/// gfnc --datasets-dir /data/fakenews sources --skip-unmatched
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the dataset files [default: datasets]
    #[arg(short, long, global = true)]
    pub datasets_dir: Option<PathBuf>,

    /// Dataset name the file names are derived from [default: GermanFakeNC]
    #[arg(short = 'n', long, global = true)]
    pub dataset_name: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// The two batch jobs.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download every article in the dataset and split entries into VALIDS and INVALIDS
    Crawl {
        /// Dataset to crawl, instead of `<datasets-dir>/<dataset-name>.json`
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Language hint for text extraction [default: de]
        #[arg(short, long, value_enum)]
        language: Option<Language>,
    },
    /// Print the distinct source domains of the VALIDS and INVALIDS files
    Sources {
        /// Log and count URLs without a usable domain instead of aborting
        #[arg(long)]
        skip_unmatched: bool,
    },
}

impl Command {
    pub fn input_override(&self) -> Option<&Path> {
        match self {
            Command::Crawl { input, .. } => input.as_deref(),
            Command::Sources { .. } => None,
        }
    }

    pub fn language_override(&self) -> Option<Language> {
        match self {
            Command::Crawl { language, .. } => *language,
            Command::Sources { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_crawl_defaults() {
        let cli = Cli::parse_from(["gfnc", "crawl"]);

        assert!(cli.config.is_none());
        assert!(cli.datasets_dir.is_none());
        assert!(matches!(
            cli.command,
            Command::Crawl {
                input: None,
                language: None
            }
        ));
    }

    #[test]
    fn test_cli_crawl_flags() {
        let cli = Cli::parse_from(["gfnc", "crawl", "-i", "/tmp/in.json", "-l", "en"]);

        assert_eq!(cli.command.input_override(), Some(Path::new("/tmp/in.json")));
        assert_eq!(cli.command.language_override(), Some(Language::English));
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "gfnc",
            "sources",
            "--skip-unmatched",
            "-d",
            "/data",
            "-n",
            "Other",
            "-c",
            "conf.yaml",
        ]);

        assert_eq!(cli.datasets_dir, Some(PathBuf::from("/data")));
        assert_eq!(cli.dataset_name.as_deref(), Some("Other"));
        assert_eq!(cli.config, Some(PathBuf::from("conf.yaml")));
        assert!(matches!(cli.command, Command::Sources { skip_unmatched: true }));
        assert_eq!(cli.command.language_override(), None);
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["gfnc"]).is_err());
    }
}
