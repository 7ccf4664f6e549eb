//! Scrapekit Core Library
//!
//! This crate provides scraping, analysis and export for two targets:
//! the GitHub trending page and quotes.toscrape.com.
//!
//! # Features
//! - Validated, immutable record types ([`GithubRepo`], [`Quote`])
//! - Chainable filter/analyzers over scraped collections
//! - Sequential page fetching that skips failed pages
//! - CSV and JSON export

pub mod analyzer;
pub mod client;
pub mod error;
pub mod parser;
pub mod records;
pub mod scraper;
pub mod writer;

// Re-export main types for convenience
pub use analyzer::{QuoteAnalyzer, RepoAnalyzer};
pub use client::{ClientConfig, PageFetcher};
pub use error::{Result, ScrapeError};
pub use records::{FieldKind, FieldSpec, GithubRepo, Quote};
pub use scraper::{QuotesScraper, TrendingScraper, GITHUB_TRENDING_URL, QUOTES_BASE_URL};
