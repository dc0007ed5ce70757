//! JSON output for the crawl results.
//!
//! All files are written the same way: UTF-8, pretty-printed with four-space
//! indentation, non-ASCII characters kept literally (`"Straße"`, never
//! `"Stra\u00dfe"`).

use crate::config::DatasetPaths;
use crate::models::{CrawlReport, DatasetEntry};
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

const INDENT: &[u8] = b"    ";

/// Serialize `value` as four-space-indented JSON.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    Ok(buf)
}

/// Write `value` to `path` as four-space-indented JSON, replacing any
/// existing file.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<(), Box<dyn Error>> {
    let json = to_pretty_json(value)?;
    if let Err(e) = fs::write(path, &json).await {
        error!(error = %e, "Failed to write JSON");
        return Err(e.into());
    }
    info!(bytes = json.len(), "Wrote JSON file");
    Ok(())
}

/// Write the three result files of a crawl: extracted texts, defective
/// entries and valid entries, in that order.
///
/// # Errors
///
/// Stops at the first file that cannot be written.
#[instrument(level = "info", skip_all)]
pub async fn write_report(report: &CrawlReport, paths: &DatasetPaths) -> Result<(), Box<dyn Error>> {
    write_json(&report.articles, &paths.texts).await?;
    let defective: Vec<&DatasetEntry> = report.defective_entries();
    write_json(&defective, &paths.invalids).await?;
    write_json(&report.valid, &paths.valids).await?;
    info!(
        articles = report.articles.len(),
        invalids = defective.len(),
        valids = report.valid.len(),
        "Wrote crawl results"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::read_entries;
    use crate::models::{DefectiveEntry, ExtractedArticle};
    use crate::scrapers::FetchError;

    fn entry(json: &str) -> DatasetEntry {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_pretty_json_indent_and_unicode() {
        let article = ExtractedArticle {
            title: "Straße".to_string(),
            text: "„Zitat“".to_string(),
        };
        let json = String::from_utf8(to_pretty_json(&vec![article]).unwrap()).unwrap();
        assert_eq!(
            json,
            "[\n    {\n        \"title\": \"Straße\",\n        \"text\": \"„Zitat“\"\n    }\n]"
        );
    }

    #[test]
    fn test_pretty_json_empty_list() {
        let empty: Vec<DatasetEntry> = Vec::new();
        assert_eq!(to_pretty_json(&empty).unwrap(), b"[]");
    }

    #[tokio::test]
    async fn test_write_report_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DatasetPaths::new(dir.path(), "Test");

        let ok = entry(r#"{"URL": "https://www.test.com/a", "Titel": "Über"}"#);
        let bad = entry(r#"{"URL": "https://www.test.com/b", "Date": "01/01/2017"}"#);
        let report = CrawlReport {
            valid: vec![ok.clone()],
            defective: vec![DefectiveEntry {
                entry: bad.clone(),
                cause: FetchError::Status(reqwest::StatusCode::GONE),
            }],
            articles: vec![ExtractedArticle {
                title: "T".to_string(),
                text: "X".to_string(),
            }],
        };

        write_report(&report, &paths).await.unwrap();

        assert_eq!(read_entries(&paths.valids).await.unwrap(), vec![ok]);
        assert_eq!(read_entries(&paths.invalids).await.unwrap(), vec![bad]);
        let texts: Vec<ExtractedArticle> =
            serde_json::from_str(&fs::read_to_string(&paths.texts).await.unwrap()).unwrap();
        assert_eq!(texts, report.articles);

        let raw = fs::read_to_string(&paths.valids).await.unwrap();
        assert!(raw.contains("\"Titel\": \"Über\""));
    }

    #[tokio::test]
    async fn test_write_json_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        assert!(write_json(&Vec::<DatasetEntry>::new(), &path).await.is_err());
    }
}
