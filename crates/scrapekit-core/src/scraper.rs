//! High-level scraping API
//!
//! Combines the page fetcher with the extractors to provide one call per
//! scrape target. Fetches run strictly one page at a time; a page that
//! answers non-200 contributes zero records and the loop continues.

use std::ops::RangeInclusive;

use crate::client::PageFetcher;
use crate::error::Result;
use crate::parser::{parse_quotes, parse_trending};
use crate::records::{GithubRepo, Quote};

/// Default URL of the GitHub trending page
pub const GITHUB_TRENDING_URL: &str = "https://github.com/trending";

/// Default base URL of the quotes site
pub const QUOTES_BASE_URL: &str = "https://quotes.toscrape.com";

/// Scraper for the GitHub trending page.
///
/// # Example
/// ```no_run
/// use scrapekit_core::TrendingScraper;
///
/// # async fn example() -> scrapekit_core::Result<()> {
/// let scraper = TrendingScraper::new()?;
/// let repos = scraper.scrape().await?;
/// println!("{} trending repositories", repos.len());
/// # Ok(())
/// # }
/// ```
pub struct TrendingScraper {
    fetcher: PageFetcher,
    url: String,
}

impl TrendingScraper {
    /// Create a scraper pointed at [`GITHUB_TRENDING_URL`].
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Ok(Self {
            fetcher: PageFetcher::new()?,
            url: GITHUB_TRENDING_URL.to_string(),
        })
    }

    /// Create a scraper with a custom fetcher and page URL.
    ///
    /// Useful for tests pointed at a local mock server.
    pub fn with_parts(fetcher: PageFetcher, url: impl Into<String>) -> Self {
        Self {
            fetcher,
            url: url.into(),
        }
    }

    /// Scrape the trending page.
    ///
    /// # Returns
    /// All cleanly extracted repositories; an empty list when the page
    /// answers non-200 or carries no listings.
    pub async fn scrape(&self) -> Result<Vec<GithubRepo>> {
        let Some(html) = self.fetcher.fetch(&self.url).await? else {
            return Ok(Vec::new());
        };
        let repos = parse_trending(&html)?;
        tracing::info!(count = repos.len(), "trending page scraped");
        Ok(repos)
    }
}

/// Scraper for paginated quotes listings.
///
/// Page URLs follow the `{base}/page/{n}` template.
pub struct QuotesScraper {
    fetcher: PageFetcher,
    base_url: String,
}

impl QuotesScraper {
    /// Create a scraper pointed at [`QUOTES_BASE_URL`].
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Ok(Self {
            fetcher: PageFetcher::new()?,
            base_url: QUOTES_BASE_URL.to_string(),
        })
    }

    /// Create a scraper with a custom fetcher and base URL.
    pub fn with_parts(fetcher: PageFetcher, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// URL of one listing page.
    ///
    /// # Example
    /// ```
    /// use scrapekit_core::{PageFetcher, QuotesScraper};
    ///
    /// let scraper = QuotesScraper::with_parts(
    ///     PageFetcher::new().unwrap(),
    ///     "https://quotes.toscrape.com/",
    /// );
    /// assert_eq!(scraper.page_url(2), "https://quotes.toscrape.com/page/2");
    /// ```
    pub fn page_url(&self, page: u32) -> String {
        format!("{}/page/{}", self.base_url, page)
    }

    /// Scrape one listing page.
    ///
    /// # Returns
    /// All cleanly extracted quotes; an empty list when the page answers
    /// non-200.
    pub async fn scrape_page(&self, page: u32) -> Result<Vec<Quote>> {
        let url = self.page_url(page);
        let Some(html) = self.fetcher.fetch(&url).await? else {
            return Ok(Vec::new());
        };
        parse_quotes(&html)
    }

    /// Scrape an inclusive page range, one page at a time.
    ///
    /// Failed pages are skipped, not retried; the pipeline pauses between
    /// fetches per the fetcher's politeness delay.
    pub async fn scrape_pages(&self, pages: RangeInclusive<u32>) -> Result<Vec<Quote>> {
        let mut quotes = Vec::new();
        let mut first = true;
        for page in pages {
            if !first {
                self.fetcher.pause().await;
            }
            first = false;

            let scraped = self.scrape_page(page).await?;
            tracing::info!(page, count = scraped.len(), "quotes page scraped");
            quotes.extend(scraped);
        }
        Ok(quotes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientConfig;

    fn quiet_fetcher() -> PageFetcher {
        PageFetcher::with_config(ClientConfig {
            timeout_secs: 5,
            page_delay_ms: 0,
        })
        .unwrap()
    }

    #[test]
    fn test_trending_scraper_creation() {
        assert!(TrendingScraper::new().is_ok());
    }

    #[test]
    fn test_quotes_scraper_creation() {
        assert!(QuotesScraper::new().is_ok());
    }

    #[test]
    fn test_page_url_template() {
        let scraper = QuotesScraper::with_parts(quiet_fetcher(), "https://quotes.toscrape.com/");
        assert_eq!(scraper.page_url(1), "https://quotes.toscrape.com/page/1");
        assert_eq!(scraper.page_url(2), "https://quotes.toscrape.com/page/2");
        assert_eq!(scraper.page_url(11), "https://quotes.toscrape.com/page/11");
    }

    #[test]
    fn test_page_url_without_trailing_slash() {
        let scraper = QuotesScraper::with_parts(quiet_fetcher(), "http://127.0.0.1:9");
        assert_eq!(scraper.page_url(9), "http://127.0.0.1:9/page/9");
    }
}
