//! Validated record types
//!
//! This module contains the two scraped value objects, [`GithubRepo`] and
//! [`Quote`]. Both are immutable after construction: the only way to obtain
//! one is through a fallible constructor that runs every field through an
//! explicit validation table. A record therefore either exists fully valid
//! or not at all.
//!
//! Deserialization goes through the same constructors (`#[serde(try_from)]`),
//! so rehydrating records from untrusted JSON re-runs the full validation.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrapeError};

/// Validation kind for a single record field.
///
/// One entry per field, enumerated explicitly instead of inspecting the
/// struct at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// String that must be non-empty after trimming
    RequiredString,
    /// String that may be empty but must be present
    OptionalString,
    /// Integer count that must be >= 0
    RequiredCount,
    /// Ordered sequence of strings, empty allowed
    StringSeq,
}

/// One row of a record's validation table: field name plus its kind.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Field name, also used as CSV/JSON column name
    pub name: &'static str,
    /// Validation kind applied to the field
    pub kind: FieldKind,
}

/// Validate a required string field: trims and rejects empty results.
fn required_string(field: &'static str, value: impl Into<String>) -> Result<String> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        return Err(ScrapeError::invalid(
            field,
            "must be at least one character long",
        ));
    }
    Ok(trimmed)
}

/// Validate a required count field: rejects negative values.
fn required_count(field: &'static str, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| ScrapeError::invalid(field, "cannot be negative"))
}

/// One trending GitHub repository.
///
/// Equality is structural over all six fields, and records hash, so a
/// collection of them can collapse duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRepo")]
pub struct GithubRepo {
    owner: String,
    repo_name: String,
    description: String,
    language: String,
    stars: u64,
    forks: u64,
}

/// Unvalidated deserialization shape for [`GithubRepo`].
#[derive(Deserialize)]
struct RawRepo {
    owner: String,
    repo_name: String,
    description: String,
    language: String,
    stars: i64,
    forks: i64,
}

impl TryFrom<RawRepo> for GithubRepo {
    type Error = ScrapeError;

    fn try_from(raw: RawRepo) -> Result<Self> {
        GithubRepo::new(
            raw.owner,
            raw.repo_name,
            raw.description,
            raw.language,
            raw.stars,
            raw.forks,
        )
    }
}

impl GithubRepo {
    /// Validation table for [`GithubRepo`], in field-declaration order.
    pub const FIELDS: [FieldSpec; 6] = [
        FieldSpec { name: "owner", kind: FieldKind::RequiredString },
        FieldSpec { name: "repo_name", kind: FieldKind::RequiredString },
        FieldSpec { name: "description", kind: FieldKind::OptionalString },
        FieldSpec { name: "language", kind: FieldKind::OptionalString },
        FieldSpec { name: "stars", kind: FieldKind::RequiredCount },
        FieldSpec { name: "forks", kind: FieldKind::RequiredCount },
    ];

    /// Construct a validated repository record.
    ///
    /// # Arguments
    /// * `owner` - Username of the owner, non-empty after trimming
    /// * `repo_name` - Repository name, non-empty after trimming
    /// * `description` - Description line, may be empty
    /// * `language` - Dominant programming language, may be empty
    /// * `stars` - Star count, must be >= 0
    /// * `forks` - Fork count, must be >= 0
    ///
    /// # Errors
    /// Returns [`ScrapeError::InvalidAttribute`] naming the first field that
    /// violates its constraint; no partially valid record is ever produced.
    pub fn new(
        owner: impl Into<String>,
        repo_name: impl Into<String>,
        description: impl Into<String>,
        language: impl Into<String>,
        stars: i64,
        forks: i64,
    ) -> Result<Self> {
        Ok(Self {
            owner: required_string("owner", owner)?,
            repo_name: required_string("repo_name", repo_name)?,
            description: description.into(),
            language: language.into(),
            stars: required_count("stars", stars)?,
            forks: required_count("forks", forks)?,
        })
    }

    /// Username of the repository owner
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name
    pub fn repo_name(&self) -> &str {
        &self.repo_name
    }

    /// Description line, empty when the listing had none
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Dominant programming language, empty when the listing had none
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Star count
    pub fn stars(&self) -> u64 {
        self.stars
    }

    /// Fork count
    pub fn forks(&self) -> u64 {
        self.forks
    }
}

/// One scraped quote.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawQuote")]
pub struct Quote {
    text: String,
    author: String,
    tags: Vec<String>,
}

/// Unvalidated deserialization shape for [`Quote`].
///
/// `tags` defaults to an empty list when the key is omitted; an explicit
/// `null` fails deserialization before validation even runs.
#[derive(Deserialize)]
struct RawQuote {
    text: String,
    author: String,
    #[serde(default)]
    tags: Vec<String>,
}

impl TryFrom<RawQuote> for Quote {
    type Error = ScrapeError;

    fn try_from(raw: RawQuote) -> Result<Self> {
        Quote::new(raw.text, raw.author, raw.tags)
    }
}

impl Quote {
    /// Validation table for [`Quote`], in field-declaration order.
    pub const FIELDS: [FieldSpec; 3] = [
        FieldSpec { name: "text", kind: FieldKind::RequiredString },
        FieldSpec { name: "author", kind: FieldKind::RequiredString },
        FieldSpec { name: "tags", kind: FieldKind::StringSeq },
    ];

    /// Construct a validated quote record.
    ///
    /// # Arguments
    /// * `text` - Quote text, non-empty after trimming
    /// * `author` - Author name, non-empty after trimming
    /// * `tags` - Ordered tag list, may be empty
    ///
    /// # Errors
    /// Returns [`ScrapeError::InvalidAttribute`] naming the first field that
    /// violates its constraint.
    pub fn new(
        text: impl Into<String>,
        author: impl Into<String>,
        tags: Vec<String>,
    ) -> Result<Self> {
        Ok(Self {
            text: required_string("text", text)?,
            author: required_string("author", author)?,
            tags,
        })
    }

    /// Quote text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Author name
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Tags in document order
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}
