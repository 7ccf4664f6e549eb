//! quotes.toscrape.com parser
//!
//! Extracts [`Quote`] records from a quotes listing page. Each listing lives
//! in a `div.quote` element; a listing missing its text or author node
//! contributes no record.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};
use crate::records::Quote;

/// Parse all quote listings from one page.
///
/// # Arguments
/// * `html` - Raw HTML content of the quotes page
///
/// # Returns
/// All listings that extracted cleanly; malformed listings are dropped
/// silently.
pub fn parse_quotes(html: &str) -> Result<Vec<Quote>> {
    let document = Html::parse_document(html);

    let quote_selector = Selector::parse("div.quote")
        .map_err(|e| ScrapeError::Parse(format!("Invalid selector: {e:?}")))?;

    let mut quotes = Vec::new();
    for listing in document.select(&quote_selector) {
        match extract_quote(&listing) {
            Some(quote) => quotes.push(quote),
            None => tracing::debug!("quote listing dropped, required sub-node missing"),
        }
    }

    Ok(quotes)
}

/// Extract one quote record from a listing element.
///
/// Required: the text span and the author element. Tags are collected in
/// document order and may be empty.
pub fn extract_quote(listing: &ElementRef) -> Option<Quote> {
    let text = extract_text(listing)?;
    let author = extract_author(listing)?;
    let tags = extract_tags(listing);

    Quote::new(text, author, tags).ok()
}

/// Quote text sits in a span with class `text`.
fn extract_text(listing: &ElementRef) -> Option<String> {
    let selector = Selector::parse("span.text").ok()?;
    let span = listing.select(&selector).next()?;
    Some(span.text().collect::<String>().trim().to_string())
}

/// Author sits in a `small` element with class `author`.
fn extract_author(listing: &ElementRef) -> Option<String> {
    let selector = Selector::parse("small.author").ok()?;
    let small = listing.select(&selector).next()?;
    Some(small.text().collect::<String>().trim().to_string())
}

/// Tags are the texts of all `a.tag` links, in document order.
fn extract_tags(listing: &ElementRef) -> Vec<String> {
    let Ok(selector) = Selector::parse("a.tag") else {
        return Vec::new();
    };
    listing
        .select(&selector)
        .map(|a| a.text().collect::<String>().trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}
