//! GitHub trending scraper entry point.
//!
//! No flags: URL, output file names and the printed summary are fixed.
//! A run that scrapes zero repositories is a valid, reported outcome.

use scrapekit_core::{writer, RepoAnalyzer, Result, TrendingScraper};
use tracing_subscriber::EnvFilter;

const JSON_FILE: &str = "repositories.json";
const CSV_FILE: &str = "repositories.csv";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let scraper = TrendingScraper::new()?;
    let repos = scraper.scrape().await?;

    writer::repos_to_json(JSON_FILE, &repos)?;
    writer::repos_to_csv(CSV_FILE, &repos)?;

    let mut analyzer = RepoAnalyzer::new(repos);

    println!("==== ANALYSIS ====");
    let total = analyzer.count();
    println!("Totally {total} repositories found.");

    if total == 0 {
        println!("No repositories to analyze");
        return Ok(());
    }

    let top = analyzer.most_starred_n(1).get();
    let most_starred = &top[0];
    println!("Most starred repository:");
    println!("Owner          : {}", most_starred.owner());
    println!("Repository Name: {}", most_starred.repo_name());
    println!("Description    : {}", most_starred.description());
    println!("Language       : {}", most_starred.language());
    println!("Stars          : {}", most_starred.stars());
    println!("Forks          : {}", most_starred.forks());

    Ok(())
}
