//! Application state container.
//!
//! [`AppState`] pairs the [`CatalogState`] with the presentation state that
//! lives beside it: the active theme and the open overlay. The catalog state
//! remains the only owner of matches and the page cursor; `AppState` only
//! reaches them through its methods.
//!
//! # Example
//!
//! ```rust
//! use bookconnect::app::{AppState, CatalogState};
//! use bookconnect::domain::LookupTable;
//! use bookconnect::ui::theme::{Theme, ThemeMode};
//!
//! let catalog = CatalogState::new(vec![], LookupTable::new(), LookupTable::new(), 36)?;
//! let state = AppState::new(catalog, Theme::from_mode(ThemeMode::Night), ThemeMode::Night);
//! assert!(state.overlay.is_none());
//! # Ok::<(), bookconnect::BookConnectError>(())
//! ```

use super::catalog::CatalogState;
use super::modes::Overlay;
use crate::domain::Book;
use crate::ui::theme::{Theme, ThemeMode};
use crate::ui::viewmodel::{BookDetail, BookPreview, ShowMoreLabel};

/// Everything the event handler mutates.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Books, matches and page cursor.
    pub catalog: CatalogState,

    /// Palette currently applied.
    pub theme: Theme,

    /// Day or night, as selected in the settings overlay.
    pub theme_mode: ThemeMode,

    /// Overlay currently open, if any.
    pub overlay: Option<Overlay>,
}

impl AppState {
    #[must_use]
    pub const fn new(catalog: CatalogState, theme: Theme, theme_mode: ThemeMode) -> Self {
        Self {
            catalog,
            theme,
            theme_mode,
            overlay: None,
        }
    }

    /// Previews for a slice of books, with author names resolved.
    #[must_use]
    pub fn previews(&self, books: &[Book]) -> Vec<BookPreview> {
        BookPreview::list(books, self.catalog.authors())
    }

    #[must_use]
    pub fn detail(&self, book: &Book) -> BookDetail {
        BookDetail::new(book, self.catalog.authors())
    }

    /// "Show more" button state for the current cursor.
    #[must_use]
    pub fn show_more_label(&self) -> ShowMoreLabel {
        ShowMoreLabel::new(self.catalog.remaining())
    }
}
