//! Data models for dataset entries, extracted articles and crawl results.
//!
//! This module defines the core data structures used throughout the application:
//! - [`DatasetEntry`]: One opaque record of the GermanFakeNC dataset
//! - [`ExtractedArticle`]: The title/text pair pulled out of a fetched page
//! - [`CrawlReport`]: The valid/defective partition produced by a crawl pass
//! - [`DomainSet`]: Distinct base domains gathered from a batch of entries
//!
//! Dataset entries keep the field names of the source dataset (`URL`, `Date`,
//! `Ratio_of_Fake_Statements`, ...), so they are stored as a raw JSON object
//! rather than a typed struct.

use crate::scrapers::FetchError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Name of the field holding the article URL in every dataset entry.
pub const URL_FIELD: &str = "URL";

/// A single record of the source dataset.
///
/// Only the `URL` field is interpreted. Every other field is carried through
/// untouched, in its original order, so that an entry written back to disk is
/// identical to the one that was read.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct DatasetEntry(Map<String, Value>);

impl DatasetEntry {
    /// The entry's `URL` field, if present and a string.
    pub fn url(&self) -> Option<&str> {
        self.0.get(URL_FIELD).and_then(Value::as_str)
    }
}

/// The human-readable part of a downloaded article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtractedArticle {
    /// The article headline.
    pub title: String,
    /// The main body text, paragraphs separated by blank lines.
    pub text: String,
}

/// An entry whose URL could not be fetched or parsed.
///
/// The cause is kept for logging only; it is never written to the
/// `INVALIDS` file.
#[derive(Debug)]
pub struct DefectiveEntry {
    /// The original, unmodified entry.
    pub entry: DatasetEntry,
    /// Why fetching or extraction failed.
    pub cause: FetchError,
}

/// The outcome of one crawl pass over a dataset.
///
/// # Invariants
///
/// - `valid.len() + defective.len()` equals the number of input entries
/// - `articles.len() == valid.len()` and `articles[i]` was extracted from `valid[i]`
/// - Both partitions keep the input order
#[derive(Debug, Default)]
pub struct CrawlReport {
    /// Entries whose article was fetched and parsed.
    pub valid: Vec<DatasetEntry>,
    /// Entries that failed, with their cause.
    pub defective: Vec<DefectiveEntry>,
    /// Extracted articles, aligned with `valid`.
    pub articles: Vec<ExtractedArticle>,
}

impl CrawlReport {
    /// Total number of entries seen by the pass.
    pub fn total(&self) -> usize {
        self.valid.len() + self.defective.len()
    }

    /// The defective entries without their causes, as written to disk.
    pub fn defective_entries(&self) -> Vec<&DatasetEntry> {
        self.defective.iter().map(|d| &d.entry).collect()
    }
}

/// Distinct base domains, kept sorted for stable console output.
pub type DomainSet = BTreeSet<String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_entry_preserves_fields_and_order() {
        let json = r#"{
            "Date": "01/12/2017",
            "URL": "https://www.test.com/xyz",
            "Ratio_of_Fake_Statements": 2,
            "Überschrift": "Straße"
        }"#;

        let entry: DatasetEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.url(), Some("https://www.test.com/xyz"));

        let keys: Vec<&String> = entry.0.keys().collect();
        assert_eq!(keys, ["Date", "URL", "Ratio_of_Fake_Statements", "Überschrift"]);

        let back: DatasetEntry = serde_json::from_str(&serde_json::to_string(&entry).unwrap()).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_dataset_entry_url_missing_or_not_a_string() {
        let missing: DatasetEntry = serde_json::from_str(r#"{"Date": "x"}"#).unwrap();
        assert_eq!(missing.url(), None);

        let number: DatasetEntry = serde_json::from_str(r#"{"URL": 42}"#).unwrap();
        assert_eq!(number.url(), None);
    }

    #[test]
    fn test_dataset_entry_rejects_non_objects() {
        let result: Result<DatasetEntry, _> = serde_json::from_str(r#""https://www.test.com/""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_extracted_article_serialization() {
        let article = ExtractedArticle {
            title: "Schöne Grüße".to_string(),
            text: "Text".to_string(),
        };
        let json = serde_json::to_string(&article).unwrap();
        assert_eq!(json, r#"{"title":"Schöne Grüße","text":"Text"}"#);
    }

    #[test]
    fn test_crawl_report_totals() {
        let entry: DatasetEntry = serde_json::from_str(r#"{"URL": "ftp://a.b/c"}"#).unwrap();
        let report = CrawlReport {
            valid: vec![entry.clone()],
            defective: vec![DefectiveEntry {
                entry: entry.clone(),
                cause: FetchError::MissingUrl,
            }],
            articles: vec![ExtractedArticle::default()],
        };

        assert_eq!(report.total(), 2);
        assert_eq!(report.defective_entries(), vec![&entry]);
    }
}
