//! Quotes scraper entry point.
//!
//! Scrapes a fixed page range from quotes.toscrape.com, exports the records
//! and prints a short summary. No flags; zero scraped quotes still exits 0.

use scrapekit_core::{writer, QuoteAnalyzer, QuotesScraper, Result};
use tracing_subscriber::EnvFilter;

const JSON_FILE: &str = "quotes.json";
const CSV_FILE: &str = "quotes.csv";
const FIRST_PAGE: u32 = 1;
const LAST_PAGE: u32 = 10;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let scraper = QuotesScraper::new()?;
    let quotes = scraper.scrape_pages(FIRST_PAGE..=LAST_PAGE).await?;

    writer::quotes_to_json(JSON_FILE, &quotes)?;
    writer::quotes_to_csv(CSV_FILE, &quotes)?;

    let mut analyzer = QuoteAnalyzer::new(quotes);

    println!("==== ANALYSIS ====");
    let total = analyzer.count();
    println!("Totally {total} quotes found.");

    if total == 0 {
        println!("No quotes to analyze");
        return Ok(());
    }

    let tagged_life = analyzer.by_tag("life", false).count();
    println!("Quotes tagged 'life': {tagged_life}");

    let long_quotes = analyzer.clear().minimum_length(100, false).count();
    println!("Quotes of 100+ characters: {long_quotes}");

    if let Some(longest) = analyzer
        .clear()
        .get()
        .iter()
        .max_by_key(|q| q.text().chars().count())
    {
        println!("Longest quote:");
        println!("Author: {}", longest.author());
        println!("Text  : {}", longest.text());
    }

    Ok(())
}
