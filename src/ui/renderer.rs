//! The rendering collaborator contract.
//!
//! [`Renderer`] is the set of visual capabilities the application needs:
//! replace the list, append to it, toggle the empty-state message, update the
//! "show more" button, show a detail card, and apply a theme. Overlay and
//! scrolling hooks have no-op defaults so minimal renderers can ignore them.
//!
//! [`dispatch`] executes the handler's actions against a renderer in order;
//! [`render`] repaints a renderer from scratch using the current state.
//!
//! # Example
//!
//! ```rust
//! use bookconnect::app::{handle_event, AppState, CatalogState, Event};
//! use bookconnect::domain::LookupTable;
//! use bookconnect::ui::{dispatch, TerminalRenderer, Theme};
//!
//! let catalog = CatalogState::new(vec![], LookupTable::new(), LookupTable::new(), 36)?;
//! let mut state = AppState::new(catalog, Theme::default(), Default::default());
//! let mut renderer = TerminalRenderer::new(Vec::new(), Theme::default(), 80);
//!
//! let actions = handle_event(&mut state, &Event::Init)?;
//! dispatch(&mut renderer, &actions)?;
//! # Ok::<(), bookconnect::BookConnectError>(())
//! ```

use crate::app::{Action, AppState, Overlay};
use crate::domain::error::Result;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BookDetail, BookPreview, DropdownOption, ShowMoreLabel};

/// Visual capabilities driven by the application.
pub trait Renderer {
    /// Replaces every visible preview with `items`.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn replace_list(&mut self, items: &[BookPreview]) -> Result<()>;

    /// Appends `items` after the visible previews.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn append_list(&mut self, items: &[BookPreview]) -> Result<()>;

    /// Shows or hides the "no results" message.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn toggle_empty_message(&mut self, show: bool) -> Result<()>;

    /// Relabels the "show more" button and enables or disables it.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn update_show_more(&mut self, label: &ShowMoreLabel) -> Result<()>;

    /// Populates and opens the detail card.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn show_detail(&mut self, detail: &BookDetail) -> Result<()>;

    /// Switches the color palette.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn apply_theme(&mut self, theme: &Theme) -> Result<()>;

    /// Fills the search form dropdowns.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn populate_filters(
        &mut self,
        _genres: &[DropdownOption],
        _authors: &[DropdownOption],
    ) -> Result<()> {
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn open_overlay(&mut self, _overlay: Overlay) -> Result<()> {
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn close_overlay(&mut self, _overlay: Overlay) -> Result<()> {
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn scroll_to_top(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Executes `actions` against `renderer` in order, stopping at the first failure.
///
/// # Errors
///
/// Returns the first error reported by the renderer.
pub fn dispatch<R: Renderer + ?Sized>(renderer: &mut R, actions: &[Action]) -> Result<()> {
    for action in actions {
        match action {
            Action::PopulateFilters { genres, authors } => renderer.populate_filters(genres, authors)?,
            Action::ReplaceList(items) => renderer.replace_list(items)?,
            Action::AppendList(items) => renderer.append_list(items)?,
            Action::ToggleEmptyMessage(show) => renderer.toggle_empty_message(*show)?,
            Action::UpdateShowMore(label) => renderer.update_show_more(label)?,
            Action::ShowDetail(detail) => renderer.show_detail(detail)?,
            Action::OpenOverlay(overlay) => renderer.open_overlay(*overlay)?,
            Action::CloseOverlay(overlay) => renderer.close_overlay(*overlay)?,
            Action::ApplyTheme(theme) => renderer.apply_theme(theme)?,
            Action::ScrollToTop => renderer.scroll_to_top()?,
        }
    }
    Ok(())
}

/// Repaints the whole list from state: every visible match, the empty-state
/// message and the "show more" button.
///
/// # Errors
///
/// Returns the first error reported by the renderer.
pub fn render<R: Renderer + ?Sized>(state: &AppState, renderer: &mut R) -> Result<()> {
    renderer.replace_list(&state.previews(state.catalog.visible()))?;
    renderer.toggle_empty_message(state.catalog.matches().is_empty())?;
    renderer.update_show_more(&state.show_more_label())
}
