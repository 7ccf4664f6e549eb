//! GitHub trending page parser
//!
//! Extracts [`GithubRepo`] records from the trending page HTML. Each listing
//! lives in a `.Box-row` element; a row missing its identity link or its
//! star/fork counters contributes no record.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};
use crate::records::GithubRepo;

/// Parse all repository listings from a trending page.
///
/// # Arguments
/// * `html` - Raw HTML content of the trending page
///
/// # Returns
/// All rows that extracted cleanly; malformed rows are dropped silently.
pub fn parse_trending(html: &str) -> Result<Vec<GithubRepo>> {
    let document = Html::parse_document(html);

    let row_selector = Selector::parse(".Box-row")
        .map_err(|e| ScrapeError::Parse(format!("Invalid selector: {e:?}")))?;

    let mut repos = Vec::new();
    for row in document.select(&row_selector) {
        match extract_repo(&row) {
            Some(repo) => repos.push(repo),
            None => tracing::debug!("trending row dropped, required sub-node missing"),
        }
    }

    Ok(repos)
}

/// Extract one repository record from a listing row.
///
/// Required: the repo link (owner + name) and both counters. Optional:
/// description and language, which degrade to empty strings.
pub fn extract_repo(row: &ElementRef) -> Option<GithubRepo> {
    let (owner, repo_name) = extract_identity(row)?;
    let description = extract_description(row).unwrap_or_default();
    let language = extract_language(row).unwrap_or_default();
    let stars = extract_counter(row, "/stargazers")?;
    let forks = extract_counter(row, "/forks")?;

    GithubRepo::new(owner, repo_name, description, language, stars, forks).ok()
}

/// Pull owner and repository name out of the listing's title link.
///
/// The link href has the shape `/{owner}/{repo_name}`.
fn extract_identity(row: &ElementRef) -> Option<(String, String)> {
    let link_selector = Selector::parse("h2 a, h1 a").ok()?;
    let link = row.select(&link_selector).next()?;
    let href = link.value().attr("href")?;

    let mut segments = href.trim_matches('/').split('/');
    let owner = segments.next()?.trim();
    let repo_name = segments.next()?.trim();
    if owner.is_empty() || repo_name.is_empty() {
        return None;
    }

    Some((owner.to_string(), repo_name.to_string()))
}

/// Description sits in the first `p` with class `col-9`.
fn extract_description(row: &ElementRef) -> Option<String> {
    let selector = Selector::parse("p.col-9").ok()?;
    let p = row.select(&selector).next()?;
    Some(p.text().collect::<String>().trim().to_string())
}

/// Language sits in a span tagged `itemprop="programmingLanguage"`.
fn extract_language(row: &ElementRef) -> Option<String> {
    let selector = Selector::parse(r#"span[itemprop="programmingLanguage"]"#).ok()?;
    let span = row.select(&selector).next()?;
    Some(span.text().collect::<String>().trim().to_string())
}

/// Star/fork counters are links whose href ends with a known suffix.
fn extract_counter(row: &ElementRef, href_suffix: &str) -> Option<i64> {
    let selector = Selector::parse("a").ok()?;
    let link = row
        .select(&selector)
        .find(|a| {
            a.value()
                .attr("href")
                .is_some_and(|href| href.ends_with(href_suffix))
        })?;
    parse_count(&link.text().collect::<String>())
}

/// Parse a counter like `1,234` into an integer.
///
/// Strips thousands-separator commas before conversion.
///
/// # Examples
/// ```
/// use scrapekit_core::parser::parse_count;
///
/// assert_eq!(parse_count(" 1,234 "), Some(1234));
/// assert_eq!(parse_count("42"), Some(42));
/// assert_eq!(parse_count("n/a"), None);
/// ```
pub fn parse_count(text: &str) -> Option<i64> {
    let re = regex_lite::Regex::new(r"[\d,]+").ok()?;
    let token = re.find(text.trim())?.as_str();
    token.replace(',', "").parse().ok()
}
