//! The URL summarizer: distinct source domains of the VALIDS and INVALIDS files.
//!
//! # Base domain rule
//!
//! A URL is split into an optional `http://`/`https://` prefix, a host, and a
//! path. The path separator after the host is required. The host must be
//! `label.tld` or `sub.label.tld`:
//!
//! | URL | Base domain |
//! |-----|-------------|
//! | `https://www.test.com/xyz` | `www.test.com` |
//! | `http://sub1.example.co/articles/123` | `sub1.example.co` |
//! | `www.test.com/xyz` | `www.test.com` |
//! | `https://www.test.com` | rejected: no path |
//! | `https://a.b.c.de/x` | rejected: too many labels |
//!
//! Rejections are explicit [`DomainError`]s. By default the first one aborts
//! the summary; with `--skip-unmatched` they are logged and counted.

use crate::config::{Partition, Settings};
use crate::dataset::read_entries;
use crate::models::{DatasetEntry, DomainSet};
use crate::outputs::console;
use std::io::Write;
use thiserror::Error;
use tracing::{info, instrument, warn};
use url::Url;

/// Why no base domain could be taken from a URL.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// The entry has no string `URL` field.
    #[error("entry has no string `URL` field")]
    MissingUrl,

    /// A scheme other than `http` or `https`.
    #[error("unsupported URL scheme in `{0}`")]
    UnsupportedScheme(String),

    /// Nothing follows the host; a `/` is required.
    #[error("no path after the host in `{0}`")]
    MissingPath(String),

    /// The host could not be parsed.
    #[error("invalid host in `{0}`")]
    InvalidHost(String),

    /// The host is not `label.tld` or `sub.label.tld`.
    #[error("host `{host}` of `{url}` is not of the form (sub.)label.tld")]
    UnsupportedHost {
        /// The parsed host.
        host: String,
        /// The original URL.
        url: String,
    },
}

/// Extract the base domain of `url`.
///
/// # Errors
///
/// Returns a [`DomainError`] if the URL has a foreign scheme, no path after
/// the host, an unparsable host, or a host with fewer than two or more than
/// three labels.
pub fn base_domain(url: &str) -> Result<String, DomainError> {
    let (scheme, rest) = if let Some(rest) = url.strip_prefix("https://") {
        ("https", rest)
    } else if let Some(rest) = url.strip_prefix("http://") {
        ("http", rest)
    } else if has_scheme(url) {
        return Err(DomainError::UnsupportedScheme(url.to_string()));
    } else {
        ("http", url)
    };

    let Some(slash) = rest.find('/') else {
        return Err(DomainError::MissingPath(url.to_string()));
    };
    let authority = &rest[..slash];
    if authority.is_empty() || authority.contains(['?', '#']) {
        return Err(DomainError::MissingPath(url.to_string()));
    }

    // Labels are checked as written; `Url` would turn IDNs into punycode.
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    let host = host_port
        .rsplit_once(':')
        .map_or(host_port, |(h, _)| h)
        .to_lowercase();

    Url::parse(&format!("{scheme}://{rest}"))
        .ok()
        .filter(|parsed| parsed.host_str().is_some())
        .ok_or_else(|| DomainError::InvalidHost(url.to_string()))?;

    if is_base_domain(&host) {
        Ok(host)
    } else {
        Err(DomainError::UnsupportedHost {
            host,
            url: url.to_string(),
        })
    }
}

/// Whether `url` starts with a scheme (`name://`) before any `/`.
fn has_scheme(url: &str) -> bool {
    match (url.find("://"), url.find('/')) {
        (Some(sep), Some(slash)) => sep < slash,
        (Some(_), None) => true,
        _ => false,
    }
}

/// `label.tld` or `sub.label.tld`, where only the middle label may contain `-`.
fn is_base_domain(host: &str) -> bool {
    let word = |label: &str| !label.is_empty() && label.chars().all(|c| c.is_alphanumeric() || c == '_');
    let middle = |label: &str| !label.is_empty() && label.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-');

    match host.split('.').collect::<Vec<_>>().as_slice() {
        &[name, tld] => middle(name) && word(tld),
        &[sub, name, tld] => word(sub) && middle(name) && word(tld),
        _ => false,
    }
}

/// A URL that was skipped because no base domain could be extracted.
#[derive(Debug, PartialEq, Eq)]
pub struct RejectedUrl {
    /// Position of the entry in its file.
    pub index: usize,
    /// Why it was rejected.
    pub reason: DomainError,
}

/// The domains found in one partition file.
#[derive(Debug, PartialEq, Eq)]
pub struct SourceSummary {
    /// `VALIDS` or `INVALIDS`.
    pub label: &'static str,
    /// Number of entries in the file.
    pub entry_count: usize,
    /// Distinct base domains.
    pub domains: DomainSet,
    /// Entries skipped with `--skip-unmatched`.
    pub rejected: Vec<RejectedUrl>,
}

/// Error returned when an entry aborts a summary.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{label} entry {index}: {reason}")]
pub struct SummaryError {
    /// The partition being summarized.
    pub label: &'static str,
    /// Position of the offending entry.
    pub index: usize,
    /// Why its URL was rejected.
    pub reason: DomainError,
}

/// Collect the distinct base domains of `entries`.
///
/// # Errors
///
/// Without `skip_unmatched`, the first entry whose URL has no base domain
/// aborts with a [`SummaryError`]. With it, such entries are recorded in
/// [`SourceSummary::rejected`] and the pass continues.
pub fn summarize_entries(
    label: &'static str,
    entries: &[DatasetEntry],
    skip_unmatched: bool,
) -> Result<SourceSummary, SummaryError> {
    let mut summary = SourceSummary {
        label,
        entry_count: entries.len(),
        domains: DomainSet::new(),
        rejected: Vec::new(),
    };

    for (index, entry) in entries.iter().enumerate() {
        let domain = entry
            .url()
            .ok_or(DomainError::MissingUrl)
            .and_then(base_domain);
        match domain {
            Ok(domain) => {
                summary.domains.insert(domain);
            }
            Err(reason) if skip_unmatched => {
                warn!(label, index, error = %reason, "Skipping URL without a base domain");
                summary.rejected.push(RejectedUrl { index, reason });
            }
            Err(reason) => return Err(SummaryError { label, index, reason }),
        }
    }
    Ok(summary)
}

/// Run the `sources` command: summarize the VALIDS file, then the INVALIDS
/// file, printing each report to stdout.
///
/// # Errors
///
/// Returns an error if a file cannot be read, or, without `skip_unmatched`,
/// on the first URL without a base domain. In that case only the failing
/// file's label and entry count are printed and later files are not read.
#[instrument(level = "info", skip_all)]
pub async fn run(settings: &Settings, skip_unmatched: bool) -> Result<Vec<SourceSummary>, Box<dyn std::error::Error>> {
    write_reports(settings, skip_unmatched, &mut std::io::stdout()).await
}

/// Summarize both partition files, writing the console report to `out`.
async fn write_reports<W: Write>(
    settings: &Settings,
    skip_unmatched: bool,
    out: &mut W,
) -> Result<Vec<SourceSummary>, Box<dyn std::error::Error>> {
    let mut summaries = Vec::new();
    for partition in [Partition::Valids, Partition::Invalids] {
        let entries = read_entries(settings.paths.partition(partition)).await?;
        write!(
            out,
            "{}",
            console::Header {
                label: partition.label(),
                entry_count: entries.len(),
            }
        )?;
        out.flush()?;

        let summary = summarize_entries(partition.label(), &entries, skip_unmatched)?;
        info!(
            label = summary.label,
            entries = summary.entry_count,
            sources = summary.domains.len(),
            rejected = summary.rejected.len(),
            "Summarized sources"
        );
        write!(out, "{}", console::Sources(&summary))?;
        summaries.push(summary);
    }
    Ok(summaries)
}
