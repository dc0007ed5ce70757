//! Configuration file loading and dataset path resolution.
//!
//! Settings come from three layers, highest precedence first:
//!
//! 1. Command-line flags
//! 2. An optional YAML file passed with `--config`
//! 3. Built-in defaults matching the dataset layout:
//!
//! ```text
//! datasets/
//! ├── GermanFakeNC.json           # crawl input
//! ├── texts_GermanFakeNC.json     # extracted title/text pairs
//! ├── VALIDS_GermanFakeNC.json    # entries that were fetched
//! └── INVALIDS_GermanFakeNC.json  # entries that failed
//! ```
//!
//! # Example
//!
//! ```yaml
//! datasets_dir: /data/fakenews
//! dataset_name: GermanFakeNC
//! language: de
//! user_agent: "Mozilla/5.0 (research crawler)"
//! ```

use crate::cli::Cli;
use crate::scrapers::http::DEFAULT_USER_AGENT;
use crate::scrapers::language::Language;
use serde::Deserialize;
use std::error::Error;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Default directory holding the dataset files.
pub const DEFAULT_DATASETS_DIR: &str = "datasets";

/// Default dataset name used to derive every file name.
pub const DEFAULT_DATASET_NAME: &str = "GermanFakeNC";

/// The contents of a YAML configuration file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Directory holding the dataset files.
    pub datasets_dir: Option<PathBuf>,
    /// Dataset name the file names are derived from.
    pub dataset_name: Option<String>,
    /// Language hint for article extraction.
    pub language: Option<Language>,
    /// User agent sent with every download.
    pub user_agent: Option<String>,
}

/// Load a [`FileConfig`] from a YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid YAML for
/// [`FileConfig`].
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn load_file_config(path: &Path) -> Result<FileConfig, Box<dyn Error>> {
    let raw = tokio::fs::read_to_string(path).await?;
    let config: FileConfig = serde_yaml::from_str(&raw)?;
    info!("Loaded configuration file");
    Ok(config)
}

/// Settings after merging flags, the config file and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Locations of every dataset file.
    pub paths: DatasetPaths,
    /// Language hint for article extraction.
    pub language: Language,
    /// User agent sent with every download.
    pub user_agent: String,
}

impl Settings {
    /// Merge `cli` over `file` over the built-in defaults.
    pub fn resolve(cli: &Cli, file: FileConfig) -> Self {
        let datasets_dir = cli
            .datasets_dir
            .clone()
            .or(file.datasets_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASETS_DIR));
        let dataset_name = cli
            .dataset_name
            .clone()
            .or(file.dataset_name)
            .unwrap_or_else(|| DEFAULT_DATASET_NAME.to_string());

        let mut paths = DatasetPaths::new(datasets_dir, &dataset_name);
        if let Some(input) = cli.command.input_override() {
            paths.input = input.to_path_buf();
        }

        Self {
            paths,
            language: cli
                .command
                .language_override()
                .or(file.language)
                .unwrap_or_default(),
            user_agent: file
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        }
    }
}

/// Which output partition a file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    /// Entries whose article was fetched.
    Valids,
    /// Entries that failed.
    Invalids,
}

impl Partition {
    /// File name prefix and console label.
    pub fn label(self) -> &'static str {
        match self {
            Partition::Valids => "VALIDS",
            Partition::Invalids => "INVALIDS",
        }
    }
}

/// Every file a crawl reads or writes.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetPaths {
    /// Directory the output files are written to.
    pub dir: PathBuf,
    /// The dataset to crawl.
    pub input: PathBuf,
    /// Extracted title/text pairs.
    pub texts: PathBuf,
    /// Entries that were fetched.
    pub valids: PathBuf,
    /// Entries that failed.
    pub invalids: PathBuf,
}

impl DatasetPaths {
    /// Derive all file names for dataset `name` inside `dir`.
    pub fn new(dir: impl Into<PathBuf>, name: &str) -> Self {
        let dir = dir.into();
        Self {
            input: dir.join(format!("{name}.json")),
            texts: dir.join(format!("texts_{name}.json")),
            valids: dir.join(format!("{}_{name}.json", Partition::Valids.label())),
            invalids: dir.join(format!("{}_{name}.json", Partition::Invalids.label())),
            dir,
        }
    }

    /// The file holding `partition`.
    pub fn partition(&self, partition: Partition) -> &Path {
        match partition {
            Partition::Valids => &self.valids,
            Partition::Invalids => &self.invalids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_dataset_paths_defaults() {
        let paths = DatasetPaths::new(DEFAULT_DATASETS_DIR, DEFAULT_DATASET_NAME);
        assert_eq!(paths.input, Path::new("datasets/GermanFakeNC.json"));
        assert_eq!(paths.texts, Path::new("datasets/texts_GermanFakeNC.json"));
        assert_eq!(paths.valids, Path::new("datasets/VALIDS_GermanFakeNC.json"));
        assert_eq!(paths.invalids, Path::new("datasets/INVALIDS_GermanFakeNC.json"));
        assert_eq!(paths.partition(Partition::Invalids), paths.invalids.as_path());
    }

    #[test]
    fn test_resolve_defaults() {
        let cli = Cli::parse_from(["gfnc", "crawl"]);
        let settings = Settings::resolve(&cli, FileConfig::default());

        assert_eq!(settings.paths, DatasetPaths::new("datasets", "GermanFakeNC"));
        assert_eq!(settings.language, Language::German);
        assert_eq!(settings.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_resolve_precedence() {
        let file: FileConfig = serde_yaml::from_str(
            "datasets_dir: /from/file\ndataset_name: FileSet\nlanguage: en\nuser_agent: test-agent\n",
        )
        .unwrap();
        let cli = Cli::parse_from(["gfnc", "--dataset-name", "CliSet", "crawl", "--language", "de"]);
        let settings = Settings::resolve(&cli, file);

        assert_eq!(settings.paths.dir, Path::new("/from/file"));
        assert_eq!(settings.paths.valids, Path::new("/from/file/VALIDS_CliSet.json"));
        assert_eq!(settings.language, Language::German);
        assert_eq!(settings.user_agent, "test-agent");
    }

    #[test]
    fn test_resolve_input_override() {
        let cli = Cli::parse_from(["gfnc", "crawl", "--input", "/tmp/custom.json"]);
        let settings = Settings::resolve(&cli, FileConfig::default());

        assert_eq!(settings.paths.input, Path::new("/tmp/custom.json"));
        assert_eq!(settings.paths.texts, Path::new("datasets/texts_GermanFakeNC.json"));
    }

    #[test]
    fn test_file_config_rejects_unknown_fields() {
        let result: Result<FileConfig, _> = serde_yaml::from_str("timeout: 3\n");
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_load_file_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        tokio::fs::write(&path, "language: english\n").await.unwrap();

        let config = load_file_config(&path).await.unwrap();
        assert_eq!(config.language, Some(Language::English));
        assert!(config.datasets_dir.is_none());
    }
}
