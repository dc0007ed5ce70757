//! HTTP downloader backed by `reqwest`.
//!
//! Requests follow redirects, time out after [`REQUEST_TIMEOUT`] and send a
//! configurable user agent. Anything other than a 2xx answer is an error; the
//! body is decoded using the charset announced by the server.

use super::{Downloader, FetchError};
use reqwest::Client;
use reqwest::redirect::Policy;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// Per-request timeout, connection through body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(7);

/// User agent sent when the configuration does not name one.
pub const DEFAULT_USER_AGENT: &str = "newspaper/0.2.8";

/// Maximum number of redirects followed per request.
const MAX_REDIRECTS: usize = 10;

/// A [`Downloader`] that performs real HTTP requests.
#[derive(Debug, Clone)]
pub struct HttpDownloader {
    client: Client,
}

impl HttpDownloader {
    /// Build a downloader sending `user_agent` with every request.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(REQUEST_TIMEOUT)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()?;
        Ok(Self { client })
    }
}

impl Downloader for HttpDownloader {
    #[instrument(level = "debug", skip_all, fields(%url))]
    async fn download(&self, url: &Url) -> Result<String, FetchError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        debug!(%status, bytes = body.len(), "Downloaded page");
        Ok(body)
    }
}
