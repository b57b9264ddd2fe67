//! Book domain model.
//!
//! A [`Book`] is a single catalog entry. Books reference authors and genres by
//! key; the display names live in [`LookupTable`]s loaded alongside the books.

use chrono::{DateTime, Datelike, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Mapping from an author or genre identifier to its display name.
///
/// Keeps the order of the catalog file, which is the order dropdowns list.
pub type LookupTable = IndexMap<String, String>;

/// Display name used when an author key has no entry in the author table.
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

/// A catalog entry.
///
/// Immutable once loaded. The `image` field is an opaque URI that is passed to
/// the renderer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    /// Key into the author table.
    pub author: String,
    /// Keys into the genre table.
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub image: String,
    pub published: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
}

impl Book {
    /// Returns the calendar year the book was published in.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookconnect::Book;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let book = Book {
    ///     id: "b1".to_string(),
    ///     title: "War and Peace".to_string(),
    ///     author: "tolstoy".to_string(),
    ///     genres: vec![],
    ///     image: String::new(),
    ///     published: Utc.with_ymd_and_hms(1869, 1, 1, 0, 0, 0).unwrap(),
    ///     description: String::new(),
    /// };
    /// assert_eq!(book.published_year(), 1869);
    /// ```
    #[must_use]
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }

    /// Returns `true` if the book is tagged with the given genre key.
    #[must_use]
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

/// Looks up an author's display name, falling back to [`UNKNOWN_AUTHOR`].
#[must_use]
pub fn author_name<'a>(authors: &'a LookupTable, key: &str) -> &'a str {
    authors.get(key).map_or(UNKNOWN_AUTHOR, String::as_str)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::TimeZone;

    /// Builds a book with the given id, title, author and genres.
    pub fn book(id: &str, title: &str, author: &str, genres: &[&str]) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            genres: genres.iter().map(|g| (*g).to_string()).collect(),
            image: format!("https://covers.example/{id}.jpg"),
            published: Utc.with_ymd_and_hms(2001, 6, 15, 0, 0, 0).unwrap(),
            description: format!("About {title}"),
        }
    }

    /// Builds `count` books with ids `book-0..book-{count-1}`.
    ///
    /// Every seventh book is tagged `fiction`; all others are `history`.
    pub fn books(count: usize) -> Vec<Book> {
        (0..count)
            .map(|i| {
                let genre = if i % 7 == 0 { "fiction" } else { "history" };
                book(&format!("book-{i}"), &format!("Title {i}"), "a1", &[genre])
            })
            .collect()
    }

    pub fn authors() -> LookupTable {
        LookupTable::from([
            ("a1".to_string(), "Ada Writer".to_string()),
            ("a2".to_string(), "Leo Tolstoy".to_string()),
        ])
    }

    pub fn genres() -> LookupTable {
        LookupTable::from([
            ("fiction".to_string(), "Fiction".to_string()),
            ("history".to_string(), "History".to_string()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn author_name_falls_back_for_unknown_key() {
        let authors = authors();
        assert_eq!(author_name(&authors, "a2"), "Leo Tolstoy");
        assert_eq!(author_name(&authors, "nobody"), UNKNOWN_AUTHOR);
    }

    #[test]
    fn has_genre_checks_membership() {
        let b = book("x", "X", "a1", &["fiction", "drama"]);
        assert!(b.has_genre("drama"));
        assert!(!b.has_genre("history"));
    }

    #[test]
    fn deserializes_from_catalog_json() {
        let json = r#"{
            "id": "760b3450-9c39-46bd-bda4-09bbe6cf7b79",
            "title": "ACDC",
            "author": "a1",
            "genres": ["fiction"],
            "image": "https://example.com/acdc.jpg",
            "published": "2003-06-30T00:00:00.000Z",
            "description": "Rock."
        }"#;
        let b: Book = serde_json::from_str(json).unwrap();
        assert_eq!(b.title, "ACDC");
        assert_eq!(b.published_year(), 2003);
        assert_eq!(b.genres, vec!["fiction"]);
    }
}
