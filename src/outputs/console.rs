//! Plain-text console report for the `sources` command.
//!
//! # Format
//!
//! ```text
//! VALIDS
//! NUM URLs: 3
//! Shortened URLs:
//! {"sub1.example.co", "www.test.com"}
//! NUM SOURCES: 2
//! ```
//!
//! The first two lines ([`Header`]) are printed as soon as a file is loaded,
//! so they appear even when a URL aborts the summary. When URLs were skipped,
//! a `NUM REJECTED: <n>` line follows the rest ([`Sources`]), then one
//! indented line per skipped entry.

use crate::sources::SourceSummary;
use std::fmt;

/// Partition label and entry count.
#[derive(Debug)]
pub struct Header<'a> {
    /// `VALIDS` or `INVALIDS`.
    pub label: &'a str,
    /// Number of entries in the file.
    pub entry_count: usize,
}

impl fmt::Display for Header<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.label)?;
        writeln!(f, "NUM URLs: {}", self.entry_count)
    }
}

/// The distinct domains of a finished summary, and any rejections.
#[derive(Debug)]
pub struct Sources<'a>(pub &'a SourceSummary);

impl fmt::Display for Sources<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.0;
        writeln!(f, "Shortened URLs:")?;
        writeln!(f, "{:?}", summary.domains)?;
        writeln!(f, "NUM SOURCES: {}", summary.domains.len())?;
        if !summary.rejected.is_empty() {
            writeln!(f, "NUM REJECTED: {}", summary.rejected.len())?;
            for rejected in &summary.rejected {
                writeln!(f, "  entry {}: {}", rejected.index, rejected.reason)?;
            }
        }
        Ok(())
    }
}
