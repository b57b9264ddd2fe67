//! View models handed to the renderer.
//!
//! These are plain display-ready records derived from books and lookup
//! tables. They contain no business logic: author keys are already resolved
//! to names and the detail subtitle is already formatted.
//!
//! # Example
//!
//! ```rust
//! use bookconnect::ui::viewmodel::ShowMoreLabel;
//!
//! let label = ShowMoreLabel::new(15);
//! assert!(label.enabled);
//! assert_eq!(label.to_string(), "Show more (15)");
//! ```

use crate::domain::filter::ANY;
use crate::domain::{author_name, Book, LookupTable};
use std::fmt;

/// One card in the preview list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookPreview {
    /// Book id, raised back as the selection event when the card is clicked.
    pub id: String,
    pub image: String,
    pub title: String,
    /// Author display name.
    pub author: String,
}

impl BookPreview {
    #[must_use]
    pub fn new(book: &Book, authors: &LookupTable) -> Self {
        Self {
            id: book.id.clone(),
            image: book.image.clone(),
            title: book.title.clone(),
            author: author_name(authors, &book.author).to_string(),
        }
    }

    /// Builds previews for a slice of books, keeping order.
    #[must_use]
    pub fn list(books: &[Book], authors: &LookupTable) -> Vec<Self> {
        books.iter().map(|book| Self::new(book, authors)).collect()
    }
}

/// Contents of the detail overlay for a single book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetail {
    pub id: String,
    pub image: String,
    pub title: String,
    /// `"{author} ({year})"`.
    pub subtitle: String,
    pub description: String,
}

impl BookDetail {
    #[must_use]
    pub fn new(book: &Book, authors: &LookupTable) -> Self {
        Self {
            id: book.id.clone(),
            image: book.image.clone(),
            title: book.title.clone(),
            subtitle: format!(
                "{} ({})",
                author_name(authors, &book.author),
                book.published_year()
            ),
            description: book.description.clone(),
        }
    }
}

/// State of the "show more" button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowMoreLabel {
    pub remaining: usize,
    /// `false` once every match is visible.
    pub enabled: bool,
}

impl ShowMoreLabel {
    #[must_use]
    pub const fn new(remaining: usize) -> Self {
        Self {
            remaining,
            enabled: remaining > 0,
        }
    }
}

impl fmt::Display for ShowMoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Show more ({})", self.remaining)
    }
}

/// One entry of the author or genre dropdown on the search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption {
    /// Form value: `"any"` or a lookup key.
    pub value: String,
    pub label: String,
}

/// Builds dropdown options: an `"any"` entry labelled `first_label`, then one
/// entry per table row in catalog order.
#[must_use]
pub fn dropdown_options(table: &LookupTable, first_label: &str) -> Vec<DropdownOption> {
    std::iter::once(DropdownOption {
        value: ANY.to_string(),
        label: first_label.to_string(),
    })
    .chain(table.iter().map(|(id, name)| DropdownOption {
        value: id.clone(),
        label: name.clone(),
    }))
    .collect()
}

#[must_use]
pub fn genre_options(genres: &LookupTable) -> Vec<DropdownOption> {
    dropdown_options(genres, "All Genres")
}

#[must_use]
pub fn author_options(authors: &LookupTable) -> Vec<DropdownOption> {
    dropdown_options(authors, "All Authors")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::fixtures::{authors, book, genres};
    use chrono::{TimeZone, Utc};

    #[test]
    fn preview_resolves_author_name() {
        let preview = BookPreview::new(&book("wp", "War and Peace", "a2", &[]), &authors());
        assert_eq!(preview.author, "Leo Tolstoy");
        assert_eq!(preview.id, "wp");
        assert_eq!(preview.image, "https://covers.example/wp.jpg");
    }

    #[test]
    fn detail_subtitle_has_author_and_year() {
        let mut b = book("wp", "War and Peace", "a2", &[]);
        b.published = Utc.with_ymd_and_hms(1869, 3, 1, 12, 0, 0).unwrap();
        let detail = BookDetail::new(&b, &authors());
        assert_eq!(detail.subtitle, "Leo Tolstoy (1869)");
        assert_eq!(detail.description, "About War and Peace");
    }

    #[test]
    fn show_more_disabled_at_zero() {
        let label = ShowMoreLabel::new(0);
        assert!(!label.enabled);
        assert_eq!(label.to_string(), "Show more (0)");
    }

    #[test]
    fn dropdown_starts_with_any() {
        let options = genre_options(&genres());
        assert_eq!(options.len(), 3);
        assert_eq!(options[0], DropdownOption { value: "any".into(), label: "All Genres".into() });
        assert_eq!(options[1].value, "fiction");
        assert_eq!(options[2].label, "History");

        let options = author_options(&LookupTable::new());
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].label, "All Authors");
    }
}
