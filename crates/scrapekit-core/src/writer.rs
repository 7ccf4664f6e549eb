//! Record export
//!
//! Serializes an ordered record collection to CSV or JSON. Columns follow the
//! records' field-declaration order; no filtering happens here.
//!
//! The two JSON shapes differ on purpose: quotes export as a top-level array
//! of objects, repositories as an object keyed by synthetic `repoN`
//! identifiers.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::Result;
use crate::records::{GithubRepo, Quote};

/// Write repositories to a CSV file, header row in field order.
pub fn repos_to_csv(path: impl AsRef<Path>, repos: &[GithubRepo]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    writer.write_record(GithubRepo::FIELDS.iter().map(|f| f.name))?;
    for repo in repos {
        let stars = repo.stars().to_string();
        let forks = repo.forks().to_string();
        writer.write_record([
            repo.owner(),
            repo.repo_name(),
            repo.description(),
            repo.language(),
            stars.as_str(),
            forks.as_str(),
        ])?;
    }
    writer.flush()?;
    tracing::info!(path = %path.as_ref().display(), count = repos.len(), "repositories exported to CSV");
    Ok(())
}

/// Write repositories to a JSON file as an object keyed `repo0`, `repo1`, ...
pub fn repos_to_json(path: impl AsRef<Path>, repos: &[GithubRepo]) -> Result<()> {
    let mut map = Map::new();
    for (i, repo) in repos.iter().enumerate() {
        map.insert(format!("repo{i}"), serde_json::to_value(repo)?);
    }

    let file = BufWriter::new(File::create(path.as_ref())?);
    serde_json::to_writer_pretty(file, &Value::Object(map))?;
    tracing::info!(path = %path.as_ref().display(), count = repos.len(), "repositories exported to JSON");
    Ok(())
}

/// Write quotes to a CSV file, header row in field order.
///
/// The tag list collapses into one column, entries joined with `;`.
pub fn quotes_to_csv(path: impl AsRef<Path>, quotes: &[Quote]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    writer.write_record(Quote::FIELDS.iter().map(|f| f.name))?;
    for quote in quotes {
        let tags = quote.tags().join(";");
        writer.write_record([quote.text(), quote.author(), tags.as_str()])?;
    }
    writer.flush()?;
    tracing::info!(path = %path.as_ref().display(), count = quotes.len(), "quotes exported to CSV");
    Ok(())
}

/// Write quotes to a JSON file as a top-level array of objects.
pub fn quotes_to_json(path: impl AsRef<Path>, quotes: &[Quote]) -> Result<()> {
    let file = BufWriter::new(File::create(path.as_ref())?);
    serde_json::to_writer_pretty(file, quotes)?;
    tracing::info!(path = %path.as_ref().display(), count = quotes.len(), "quotes exported to JSON");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_repos() -> Vec<GithubRepo> {
        vec![
            GithubRepo::new("rust-lang", "rust", "The language", "Rust", 94123, 12345).unwrap(),
            GithubRepo::new("torvalds", "linux", "", "C", 170000, 53000).unwrap(),
        ]
    }

    fn sample_quotes() -> Vec<Quote> {
        vec![
            Quote::new("first", "author1", vec!["a".into(), "b".into()]).unwrap(),
            Quote::new("second", "author2", Vec::new()).unwrap(),
        ]
    }

    #[test]
    fn test_repos_csv_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repos.csv");
        repos_to_csv(&path, &sample_repos()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "owner,repo_name,description,language,stars,forks"
        );
        assert_eq!(
            lines.next().unwrap(),
            "rust-lang,rust,The language,Rust,94123,12345"
        );
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn test_repos_json_synthetic_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repos.json");
        repos_to_json(&path, &sample_repos()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: Value = serde_json::from_str(&content).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["repo0"]["owner"], "rust-lang");
        assert_eq!(object["repo1"]["stars"], 170000);
    }

    #[test]
    fn test_repos_json_rehydrates_through_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repos.json");
        let repos = sample_repos();
        repos_to_json(&path, &repos).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: Value = serde_json::from_str(&content).unwrap();
        let back: GithubRepo = serde_json::from_value(value["repo0"].clone()).unwrap();
        assert_eq!(back, repos[0]);
    }

    #[test]
    fn test_quotes_csv_joins_tags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.csv");
        quotes_to_csv(&path, &sample_quotes()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next().unwrap(), "text,author,tags");
        assert_eq!(lines.next().unwrap(), "first,author1,a;b");
        assert_eq!(lines.next().unwrap(), "second,author2,");
    }

    #[test]
    fn test_quotes_json_array_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.json");
        let quotes = sample_quotes();
        quotes_to_json(&path, &quotes).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let back: Vec<Quote> = serde_json::from_str(&content).unwrap();
        assert_eq!(back, quotes);
    }

    #[test]
    fn test_empty_collection_still_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        quotes_to_csv(&path, &[]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim(), "text,author,tags");
    }
}
