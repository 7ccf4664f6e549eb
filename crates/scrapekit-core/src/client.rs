//! HTTP page fetcher
//!
//! One GET per page, no retry and no backoff: a page that answers with
//! anything other than HTTP 200 simply contributes no records and the
//! page-range driver moves on.

use std::time::Duration;

use crate::error::Result;

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for the page fetcher
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Pause between successive page fetches in milliseconds (default: 250)
    pub page_delay_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            page_delay_ms: 250,
        }
    }
}

/// HTTP client that fetches one page of HTML at a time.
///
/// Requests run strictly sequentially; there is no shared state between
/// fetches beyond the underlying connection pool.
pub struct PageFetcher {
    client: reqwest::Client,
    page_delay: Duration,
}

impl PageFetcher {
    /// Create a fetcher with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a fetcher with custom configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            page_delay: Duration::from_millis(config.page_delay_ms),
        })
    }

    /// Fetch one page of HTML.
    ///
    /// # Arguments
    /// * `url` - Absolute URL of the page
    ///
    /// # Returns
    /// * `Ok(Some(body))` on HTTP 200
    /// * `Ok(None)` on any other status code (the page is skipped)
    ///
    /// # Errors
    /// `ScrapeError::Http` when the transport itself fails (connection
    /// refused, timeout, ...).
    pub async fn fetch(&self, url: &str) -> Result<Option<String>> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        // Success is exactly 200; a 203/206 via some proxy is not a real page.
        if status != reqwest::StatusCode::OK {
            tracing::warn!(%url, %status, "page fetch skipped");
            return Ok(None);
        }

        Ok(Some(response.text().await?))
    }

    /// Politeness pause between successive page fetches.
    pub async fn pause(&self) {
        if !self.page_delay.is_zero() {
            tokio::time::sleep(self.page_delay).await;
        }
    }

    /// Configured pause between pages.
    pub fn page_delay(&self) -> Duration {
        self.page_delay
    }
}
