//! Chainable record analyzers
//!
//! The analyzers wrap a scraped record collection in two layers: an immutable
//! `base` set (duplicates collapsed by structural equality) and a mutable
//! `view` that successive filter calls narrow down. Every filter returns the
//! analyzer again, so callers compose boolean-AND pipelines fluently:
//!
//! ```
//! use scrapekit_core::{GithubRepo, RepoAnalyzer};
//!
//! let repos = vec![
//!     GithubRepo::new("a", "one", "", "", 50, 4).unwrap(),
//!     GithubRepo::new("b", "two", "", "", 500, 40).unwrap(),
//! ];
//! let mut analyzer = RepoAnalyzer::new(repos);
//! assert_eq!(analyzer.minimum_stars(100, false).count(), 1);
//! ```
//!
//! Filters only ever touch the view; `clear` restores it from the base set,
//! so repeated analyses run without re-scraping. An empty view is a valid
//! outcome, not an error.

use std::cmp::Reverse;
use std::collections::HashSet;
use std::hash::Hash;

use crate::records::{GithubRepo, Quote};

/// Base-plus-view record store shared by both analyzers.
///
/// Linear scans over a plain `Vec` are deliberate: collections are a single
/// page of listings, so no indexing backend is warranted.
#[derive(Debug, Clone)]
struct FilterSet<R> {
    base: Vec<R>,
    view: Vec<R>,
}

impl<R: Clone + Eq + Hash> FilterSet<R> {
    /// Build from any record iterator, collapsing structural duplicates
    /// while preserving first-seen order.
    fn new(records: impl IntoIterator<Item = R>) -> Self {
        let mut seen = HashSet::new();
        let mut base = Vec::new();
        for record in records {
            if seen.insert(record.clone()) {
                base.push(record);
            }
        }
        let view = base.clone();
        Self { base, view }
    }

    /// Retain view records matching `pred`, or the complement when `negate`.
    fn retain<F>(&mut self, negate: bool, pred: F)
    where
        F: Fn(&R) -> bool,
    {
        self.view.retain(|record| pred(record) != negate);
    }

    /// Keep the `n` view records with the largest key, stable descending.
    ///
    /// `n = 0` keeps nothing; `n >= len` keeps the whole view (sorted).
    fn top_n_by_key<K, F>(&mut self, n: usize, key: F)
    where
        K: Ord,
        F: Fn(&R) -> K,
    {
        self.view.sort_by_key(|record| Reverse(key(record)));
        self.view.truncate(n);
    }

    fn count(&self) -> usize {
        self.view.len()
    }

    fn materialize(&self) -> Vec<R> {
        self.view.clone()
    }

    fn clear(&mut self) {
        self.view = self.base.clone();
    }
}

/// Chainable analyzer over [`GithubRepo`] records.
#[derive(Debug, Clone)]
pub struct RepoAnalyzer {
    inner: FilterSet<GithubRepo>,
}

impl RepoAnalyzer {
    /// Build an analyzer from scraped repositories.
    ///
    /// Duplicates (full structural equality) collapse to one; the remaining
    /// records form the immutable base set.
    pub fn new(repos: impl IntoIterator<Item = GithubRepo>) -> Self {
        Self {
            inner: FilterSet::new(repos),
        }
    }

    /// Retain repositories with at least `stars` stars.
    pub fn minimum_stars(&mut self, stars: u64, negate: bool) -> &mut Self {
        self.inner.retain(negate, |repo| repo.stars() >= stars);
        self
    }

    /// Retain repositories with at most `stars` stars.
    pub fn maximum_stars(&mut self, stars: u64, negate: bool) -> &mut Self {
        self.inner.retain(negate, |repo| repo.stars() <= stars);
        self
    }

    /// Retain repositories forked at least `forks` times.
    pub fn minimum_forks(&mut self, forks: u64, negate: bool) -> &mut Self {
        self.inner.retain(negate, |repo| repo.forks() >= forks);
        self
    }

    /// Retain repositories forked at most `forks` times.
    pub fn maximum_forks(&mut self, forks: u64, negate: bool) -> &mut Self {
        self.inner.retain(negate, |repo| repo.forks() <= forks);
        self
    }

    /// Keep the `n` most starred repositories, stable descending by stars.
    pub fn most_starred_n(&mut self, n: usize) -> &mut Self {
        self.inner.top_n_by_key(n, |repo| repo.stars());
        self
    }

    /// Keep the `n` most forked repositories, stable descending by forks.
    pub fn most_forked_n(&mut self, n: usize) -> &mut Self {
        self.inner.top_n_by_key(n, |repo| repo.forks());
        self
    }

    /// Retain repositories whose `field` contains `needle` (case-sensitive).
    ///
    /// Supported field names are `owner`, `repo_name` and `description`;
    /// any other name leaves the view untouched.
    pub fn with_substring(&mut self, field: &str, needle: &str, negate: bool) -> &mut Self {
        match field {
            "owner" => self.inner.retain(negate, |repo| repo.owner().contains(needle)),
            "repo_name" => self
                .inner
                .retain(negate, |repo| repo.repo_name().contains(needle)),
            "description" => self
                .inner
                .retain(negate, |repo| repo.description().contains(needle)),
            other => {
                tracing::debug!(field = other, "unsupported substring field, view unchanged");
            }
        }
        self
    }

    /// Number of repositories in the current view.
    pub fn count(&self) -> usize {
        self.inner.count()
    }

    /// Defensive copy of the current view, in view order.
    pub fn get(&self) -> Vec<GithubRepo> {
        self.inner.materialize()
    }

    /// Discard all filters, restoring the view to the base set.
    pub fn clear(&mut self) -> &mut Self {
        self.inner.clear();
        self
    }
}

/// Chainable analyzer over [`Quote`] records.
#[derive(Debug, Clone)]
pub struct QuoteAnalyzer {
    inner: FilterSet<Quote>,
}

impl QuoteAnalyzer {
    /// Build an analyzer from scraped quotes, collapsing duplicates.
    pub fn new(quotes: impl IntoIterator<Item = Quote>) -> Self {
        Self {
            inner: FilterSet::new(quotes),
        }
    }

    /// Retain quotes whose text is at least `min_length` characters long.
    pub fn minimum_length(&mut self, min_length: usize, negate: bool) -> &mut Self {
        self.inner
            .retain(negate, |quote| quote.text().chars().count() >= min_length);
        self
    }

    /// Retain quotes whose text is at most `max_length` characters long.
    pub fn maximum_length(&mut self, max_length: usize, negate: bool) -> &mut Self {
        self.inner
            .retain(negate, |quote| quote.text().chars().count() <= max_length);
        self
    }

    /// Retain quotes by exact author name.
    pub fn by_author(&mut self, author: &str, negate: bool) -> &mut Self {
        self.inner.retain(negate, |quote| quote.author() == author);
        self
    }

    /// Retain quotes whose tag list contains `tag` exactly.
    pub fn by_tag(&mut self, tag: &str, negate: bool) -> &mut Self {
        self.inner
            .retain(negate, |quote| quote.tags().iter().any(|t| t == tag));
        self
    }

    /// Number of quotes in the current view.
    pub fn count(&self) -> usize {
        self.inner.count()
    }

    /// Defensive copy of the current view, in view order.
    pub fn get(&self) -> Vec<Quote> {
        self.inner.materialize()
    }

    /// Discard all filters, restoring the view to the base set.
    pub fn clear(&mut self) -> &mut Self {
        self.inner.clear();
        self
    }
}
