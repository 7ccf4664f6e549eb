//! HTML extractors
//!
//! This module contains the per-site extraction logic:
//! - `trending`: GitHub trending page listings
//! - `quotes`: quotes.toscrape.com listings
//!
//! Page-level functions return every record they can extract; a listing
//! missing a required sub-node yields nothing and is skipped silently.

pub mod quotes;
pub mod trending;

// Re-export main parsing functions
pub use quotes::{extract_quote, parse_quotes};
pub use trending::{extract_repo, parse_count, parse_trending};
