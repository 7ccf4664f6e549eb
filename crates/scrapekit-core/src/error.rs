//! Error types for scrapekit
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for scrapekit operations
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// HTTP transport failed (connection, timeout, ...)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse HTML content
    #[error("Failed to parse HTML: {0}")]
    Parse(String),

    /// A record field failed validation at construction time
    #[error("Invalid attribute `{field}`: {reason}")]
    InvalidAttribute {
        /// Name of the offending field
        field: &'static str,
        /// Human-readable constraint that was violated
        reason: String,
    },

    /// Writing an export file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    /// Shorthand for an [`ScrapeError::InvalidAttribute`] with an owned reason.
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ScrapeError::InvalidAttribute {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type alias for scrapekit operations
pub type Result<T> = std::result::Result<T, ScrapeError>;
