//! Article downloading and extraction.
//!
//! Fetching an article is split into two phases, the same way a
//! newspaper-style extractor works:
//!
//! 1. **Download**: Fetch the raw HTML behind a URL ([`Downloader`])
//! 2. **Parse**: Pull a title and the main body text out of that HTML
//!    ([`article::parse_article`])
//!
//! # Submodules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`http`] | [`Downloader`] backed by `reqwest` |
//! | [`article`] | Title and body text extraction with `scraper` |
//! | [`language`] | Language hints accepted by the extractor |
//! | [`stopwords`] | Per-language stopword lists used to score text blocks |
//!
//! # Errors
//!
//! Every way a single article can fail is a [`FetchError`]. The crawler never
//! lets one of these abort a batch; it files the entry as defective instead.

pub mod article;
pub mod http;
pub mod language;
pub mod stopwords;

use crate::models::ExtractedArticle;
use language::Language;
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

/// Why a single article could not be fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The dataset entry has no string `URL` field.
    #[error("entry has no string `URL` field")]
    MissingUrl,

    /// The URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The URL parsed but does not use `http` or `https`.
    #[error("unsupported URL scheme `{0}`")]
    UnsupportedScheme(String),

    /// Connection, TLS, timeout or body decoding failure.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("server answered {0}")]
    Status(reqwest::StatusCode),
}

impl FetchError {
    /// Short, stable label used when summarizing failures.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::MissingUrl => "missing_url",
            FetchError::InvalidUrl(_) => "invalid_url",
            FetchError::UnsupportedScheme(_) => "unsupported_scheme",
            FetchError::Request(e) if e.is_timeout() => "timeout",
            FetchError::Request(_) => "request",
            FetchError::Status(_) => "status",
        }
    }
}

/// Something that can fetch the HTML behind a URL.
///
/// The production implementation is [`http::HttpDownloader`]; tests swap in
/// canned pages so the crawler runs without network access.
pub trait Downloader {
    /// Download the document at `url` and return its decoded body.
    async fn download(&self, url: &Url) -> Result<String, FetchError>;
}

/// Download and parse a single article.
///
/// # Arguments
///
/// * `downloader` - Where the HTML comes from
/// * `url` - The raw URL string from the dataset entry
/// * `language` - Language hint for body text extraction
///
/// # Errors
///
/// Returns a [`FetchError`] if the URL is unusable or the download fails.
/// Parsing itself never fails: a page without recognizable content yields an
/// article with empty fields.
#[instrument(level = "debug", skip(downloader))]
pub async fn fetch_article<D: Downloader>(
    downloader: &D,
    url: &str,
    language: Language,
) -> Result<ExtractedArticle, FetchError> {
    let url = Url::parse(url)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(FetchError::UnsupportedScheme(url.scheme().to_string()));
    }

    let html = downloader.download(&url).await?;
    let article = article::parse_article(&html, language);
    debug!(
        bytes = html.len(),
        title_chars = article.title.chars().count(),
        text_chars = article.text.chars().count(),
        "Parsed article"
    );
    Ok(article)
}

#[cfg(test)]
pub(crate) mod testing {
    //! A canned [`Downloader`] for tests.

    use super::{Downloader, FetchError};
    use std::collections::HashMap;
    use url::Url;

    /// Serves fixed pages by URL; unknown URLs answer 404.
    #[derive(Debug, Default)]
    pub struct FakeDownloader {
        pages: HashMap<String, String>,
    }

    impl FakeDownloader {
        pub fn with_page(mut self, url: &str, html: &str) -> Self {
            self.pages.insert(url.to_string(), html.to_string());
            self
        }
    }

    impl Downloader for FakeDownloader {
        async fn download(&self, url: &Url) -> Result<String, FetchError> {
            self.pages
                .get(url.as_str())
                .cloned()
                .ok_or(FetchError::Status(reqwest::StatusCode::NOT_FOUND))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeDownloader;
    use super::*;

    const PAGE: &str = r#"<html><head><title>Ein Titel</title></head>
        <body><div><p>Das ist der Text, und er ist nicht sehr lang, aber er ist da.</p></div></body></html>"#;

    #[tokio::test]
    async fn test_fetch_article_success() {
        let downloader = FakeDownloader::default().with_page("https://www.test.com/xyz", PAGE);
        let article = fetch_article(&downloader, "https://www.test.com/xyz", Language::German)
            .await
            .unwrap();

        assert_eq!(article.title, "Ein Titel");
        assert!(article.text.starts_with("Das ist der Text"));
    }

    #[tokio::test]
    async fn test_fetch_article_invalid_url() {
        let downloader = FakeDownloader::default();
        let err = fetch_article(&downloader, "www.test.com/xyz", Language::German)
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
        assert_eq!(err.kind(), "invalid_url");
    }

    #[tokio::test]
    async fn test_fetch_article_unsupported_scheme() {
        let downloader = FakeDownloader::default();
        let err = fetch_article(&downloader, "ftp://www.test.com/xyz", Language::German)
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::UnsupportedScheme(ref s) if s == "ftp"));
    }

    #[tokio::test]
    async fn test_fetch_article_status_error() {
        let downloader = FakeDownloader::default();
        let err = fetch_article(&downloader, "https://www.test.com/missing", Language::German)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "server answered 404 Not Found");
        assert_eq!(err.kind(), "status");
    }
}
