//! Static catalog loading.
//!
//! The catalog is a single JSON document holding the books, the author and
//! genre lookup tables, and optionally the number of books per page:
//!
//! ```json
//! {
//!   "books": [
//!     {
//!       "id": "760b3450",
//!       "title": "ACDC",
//!       "author": "a1",
//!       "genres": ["g1"],
//!       "image": "https://example.com/acdc.jpg",
//!       "published": "2003-06-30T00:00:00.000Z",
//!       "description": "..."
//!     }
//!   ],
//!   "authors": { "a1": "Ada Writer" },
//!   "genres": { "g1": "Fiction" },
//!   "books_per_page": 36
//! }
//! ```
//!
//! Loading only parses and checks identifier uniqueness. Everything else
//! (page size, empty tables) is validated by
//! [`CatalogState::new`](crate::app::CatalogState::new).

use crate::domain::error::{BookConnectError, Result};
use crate::domain::{Book, LookupTable};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Parsed contents of a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub books: Vec<Book>,
    #[serde(default)]
    pub authors: LookupTable,
    #[serde(default)]
    pub genres: LookupTable,
    /// Page size shipped with the data, if any.
    #[serde(default)]
    pub books_per_page: Option<usize>,
}

impl Catalog {
    /// Parses a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or two books share an id.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.check_unique_ids()?;
        catalog.log_dangling_references();

        tracing::debug!(
            books = catalog.books.len(),
            authors = catalog.authors.len(),
            genres = catalog.genres.len(),
            books_per_page = ?catalog.books_per_page,
            "catalog parsed"
        );

        Ok(catalog)
    }

    /// Reads and parses a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or [`Catalog::from_json`]
    /// rejects its contents.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bookconnect::catalog::Catalog;
    ///
    /// let catalog = Catalog::from_file("data/books.json")?;
    /// println!("{} books", catalog.books.len());
    /// # Ok::<(), bookconnect::BookConnectError>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading catalog");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    fn check_unique_ids(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.books.len());
        for book in &self.books {
            if !seen.insert(book.id.as_str()) {
                return Err(BookConnectError::Catalog(format!(
                    "duplicate book id '{}'",
                    book.id
                )));
            }
        }
        Ok(())
    }

    /// Unknown author or genre keys are tolerated; they only affect display names.
    fn log_dangling_references(&self) {
        for book in &self.books {
            if !self.authors.contains_key(&book.author) {
                tracing::debug!(id = %book.id, author = %book.author, "book references unknown author");
            }
            for genre in book.genres.iter().filter(|g| !self.genres.contains_key(*g)) {
                tracing::debug!(id = %book.id, genre = %genre, "book references unknown genre");
            }
        }
    }
}
