//! Overlay state for the modal panels of the interface.
//!
//! At most one overlay is open at a time:
//! - **Search**: the title/author/genre search form
//! - **Settings**: the theme picker
//! - **Detail**: the summary card of a selected book

/// A modal panel layered over the preview list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Search form. Closed again when a search is submitted or cancelled.
    Search,

    /// Theme settings. Closed when a theme is applied or cancelled.
    Settings,

    /// Detail card for the selected book.
    Detail,
}
