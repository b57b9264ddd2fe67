//! Actions representing visual side effects for the renderer.
//!
//! The event handler returns a `Vec<Action>` for every event. Actions carry
//! display-ready data only; [`dispatch`](crate::ui::renderer::dispatch) feeds
//! them to a [`Renderer`](crate::ui::renderer::Renderer) in order.
//!
//! # Example
//!
//! ```rust
//! use bookconnect::app::Action;
//! use bookconnect::ui::viewmodel::ShowMoreLabel;
//!
//! let actions = vec![
//!     Action::ToggleEmptyMessage(false),
//!     Action::UpdateShowMore(ShowMoreLabel::new(12)),
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use super::modes::Overlay;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BookDetail, BookPreview, DropdownOption, ShowMoreLabel};

/// Visual commands produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fills the author and genre dropdowns of the search form.
    PopulateFilters {
        genres: Vec<DropdownOption>,
        authors: Vec<DropdownOption>,
    },

    /// Replaces the whole preview list.
    ReplaceList(Vec<BookPreview>),

    /// Appends previews after the ones already shown.
    AppendList(Vec<BookPreview>),

    /// Shows (`true`) or hides the "no results" message.
    ToggleEmptyMessage(bool),

    /// Relabels and enables/disables the "show more" button.
    UpdateShowMore(ShowMoreLabel),

    /// Opens the detail card for one book.
    ShowDetail(BookDetail),

    /// Opens an overlay.
    OpenOverlay(Overlay),

    /// Closes an overlay.
    CloseOverlay(Overlay),

    /// Applies a color palette.
    ApplyTheme(Theme),

    /// Scrolls the list back to its first entry.
    ScrollToTop,
}
