//! The article fetcher: download every entry's URL and partition the dataset.
//!
//! Entries are processed strictly one after another, in input order. A failed
//! entry is filed as defective together with its [`FetchError`] and never
//! aborts the pass. Only reading the dataset or writing the result files can
//! fail the run.

use crate::config::Settings;
use crate::dataset::read_entries;
use crate::models::{CrawlReport, DatasetEntry, DefectiveEntry};
use crate::outputs::json::write_report;
use crate::scrapers::http::HttpDownloader;
use crate::scrapers::language::Language;
use crate::scrapers::{Downloader, FetchError, fetch_article};
use crate::utils::{ensure_writable_dir, truncate_for_log};
use futures::stream::{self, StreamExt};
use itertools::Itertools;
use std::error::Error;
use tracing::{debug, info, instrument, warn};

/// Fetch every entry and partition the dataset into valid and defective.
///
/// # Arguments
///
/// * `downloader` - Source of the article HTML
/// * `entries` - The dataset, in the order it should be processed
/// * `language` - Language hint for text extraction
///
/// # Returns
///
/// A [`CrawlReport`] holding every input entry exactly once.
#[instrument(level = "info", skip_all, fields(total = entries.len(), %language))]
pub async fn crawl_entries<D: Downloader>(
    downloader: &D,
    entries: Vec<DatasetEntry>,
    language: Language,
) -> CrawlReport {
    let total = entries.len();

    let outcomes: Vec<_> = stream::iter(entries.into_iter().enumerate())
        .then(|(index, entry)| async move {
            let outcome = match entry.url() {
                Some(url) => fetch_article(downloader, url, language).await,
                None => Err(FetchError::MissingUrl),
            };
            (index, entry, outcome)
        })
        .collect()
        .await;

    let mut report = CrawlReport::default();
    for (index, entry, outcome) in outcomes {
        match outcome {
            Ok(article) => {
                debug!(
                    index,
                    total,
                    url = entry.url().unwrap_or_default(),
                    title = %truncate_for_log(&article.title, 80),
                    "Fetched article"
                );
                report.valid.push(entry);
                report.articles.push(article);
            }
            Err(cause) => {
                warn!(
                    index,
                    total,
                    url = entry.url().unwrap_or_default(),
                    kind = cause.kind(),
                    error = %cause,
                    "Article fetch failed; entry marked defective"
                );
                report.defective.push(DefectiveEntry { entry, cause });
            }
        }
    }

    let failure_kinds = report
        .defective
        .iter()
        .map(|d| d.cause.kind())
        .counts()
        .into_iter()
        .sorted()
        .map(|(kind, count)| format!("{kind}={count}"))
        .join(", ");
    info!(
        total = report.total(),
        valid = report.valid.len(),
        defective = report.defective.len(),
        failures = %failure_kinds,
        "Crawl pass complete"
    );
    report
}

/// Run the `crawl` command: read the dataset, fetch every article and write
/// the texts, INVALIDS and VALIDS files.
///
/// # Errors
///
/// Returns an error if the output directory is not writable, the dataset
/// cannot be read, the HTTP client cannot be built, or an output file cannot
/// be written. Per-entry failures are not errors.
#[instrument(level = "info", skip_all, fields(input = %settings.paths.input.display()))]
pub async fn run(settings: &Settings) -> Result<CrawlReport, Box<dyn Error>> {
    ensure_writable_dir(&settings.paths.dir).await?;

    let entries = read_entries(&settings.paths.input).await?;
    let downloader = HttpDownloader::new(&settings.user_agent)?;
    info!(count = entries.len(), language = %settings.language, "Starting crawl");

    let report = crawl_entries(&downloader, entries, settings.language).await;
    write_report(&report, &settings.paths).await?;
    Ok(report)
}
