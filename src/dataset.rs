//! Reading dataset files.

use crate::models::DatasetEntry;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Read a JSON array of dataset entries from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of
/// objects.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn read_entries(path: &Path) -> Result<Vec<DatasetEntry>, Box<dyn Error>> {
    let raw = fs::read_to_string(path).await?;
    let entries: Vec<DatasetEntry> = serde_json::from_str(&raw)?;
    info!(count = entries.len(), "Read dataset entries");
    Ok(entries)
}
