//! Filter criteria and the book-matching predicate.
//!
//! A [`FilterSpec`] holds the three search fields of the search form: a title
//! substring, an author selection and a genre selection. [`matches_filter`] is
//! the AND of the three clauses and has no state of its own.

use crate::domain::book::Book;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Form value meaning "do not filter on this field".
pub const ANY: &str = "any";

/// A dropdown choice: either every value or one specific identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    #[default]
    Any,
    Id(String),
}

impl Selection {
    /// Parses a raw form value; `"any"` and blank values select everything.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ANY {
            Self::Any
        } else {
            Self::Id(value.to_string())
        }
    }

    /// Returns `true` if `value` satisfies this selection.
    #[must_use]
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Id(id) => id == value,
        }
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Selection> for String {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::Any => ANY.to_string(),
            Selection::Id(id) => id,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str(ANY),
            Self::Id(id) => f.write_str(id),
        }
    }
}

/// Search criteria submitted from the search form.
///
/// The default spec matches every book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Case-insensitive title substring. Blank means no title filtering.
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: Selection,
    #[serde(default)]
    pub genre: Selection,
}

impl FilterSpec {
    /// Creates a spec matching every book.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Selection::Id(author.into());
        self
    }

    #[must_use]
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Selection::Id(genre.into());
        self
    }

    /// Builds a spec from raw form fields `title`, `author` and `genre`.
    ///
    /// Missing fields behave like an empty title or an `"any"` selection.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use bookconnect::domain::filter::{FilterSpec, Selection};
    ///
    /// let mut form = BTreeMap::new();
    /// form.insert("title".to_string(), "war".to_string());
    /// form.insert("genre".to_string(), "any".to_string());
    ///
    /// let spec = FilterSpec::from_form(&form);
    /// assert_eq!(spec.title, "war");
    /// assert_eq!(spec.author, Selection::Any);
    /// assert_eq!(spec.genre, Selection::Any);
    /// ```
    #[must_use]
    pub fn from_form(form: &BTreeMap<String, String>) -> Self {
        Self {
            title: form.get("title").cloned().unwrap_or_default(),
            author: form.get("author").map_or(Selection::Any, |v| Selection::parse(v)),
            genre: form.get("genre").map_or(Selection::Any, |v| Selection::parse(v)),
        }
    }
}

/// Genre clause: `Any`, or the book carries the selected genre.
#[must_use]
pub fn genre_match(book: &Book, spec: &FilterSpec) -> bool {
    match &spec.genre {
        Selection::Any => true,
        Selection::Id(genre) => book.has_genre(genre),
    }
}

/// Title clause: blank query, or case-insensitive substring of the title.
///
/// `str::to_lowercase` applies the Unicode default case mapping, which does
/// not depend on the process locale.
#[must_use]
pub fn title_match(book: &Book, spec: &FilterSpec) -> bool {
    spec.title.trim().is_empty()
        || book
            .title
            .to_lowercase()
            .contains(&spec.title.to_lowercase())
}

/// Author clause: `Any`, or the book's author key equals the selection.
#[must_use]
pub fn author_match(book: &Book, spec: &FilterSpec) -> bool {
    spec.author.accepts(&book.author)
}

/// Returns `true` if `book` satisfies all three clauses of `spec`.
#[must_use]
pub fn matches_filter(book: &Book, spec: &FilterSpec) -> bool {
    genre_match(book, spec) && title_match(book, spec) && author_match(book, spec)
}
