//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point for user interaction. It
//! pattern-matches the event, drives the [`CatalogState`](super::CatalogState)
//! transitions, and returns the ordered actions the renderer must perform.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Init`
//! - **Search**: `OpenSearch`, `CancelSearch`, `SubmitFilter`, `SubmitSearchForm`
//! - **List**: `ShowMore`, `SelectPreview`, `CloseDetail`
//! - **Settings**: `OpenSettings`, `CancelSettings`, `ChangeTheme`
//!
//! # Example
//!
//! ```rust
//! use bookconnect::app::{handle_event, Action, AppState, CatalogState, Event};
//! use bookconnect::domain::LookupTable;
//! use bookconnect::ui::Theme;
//!
//! let catalog = CatalogState::new(vec![], LookupTable::new(), LookupTable::new(), 36)?;
//! let mut state = AppState::new(catalog, Theme::default(), Default::default());
//!
//! let actions = handle_event(&mut state, &Event::ShowMore)?;
//! assert!(actions.is_empty()); // nothing left to reveal
//! # Ok::<(), bookconnect::BookConnectError>(())
//! ```

use super::actions::Action;
use super::modes::Overlay;
use super::state::AppState;
use crate::domain::error::{BookConnectError, Result};
use crate::domain::filter::FilterSpec;
use crate::ui::theme::{Theme, ThemeMode};
use crate::ui::viewmodel::{author_options, genre_options};
use std::collections::BTreeMap;

/// User interactions the application responds to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// First render: dropdowns, the first page, and the button state.
    Init,

    /// Opens the search form.
    OpenSearch,
    /// Closes the search form without searching.
    CancelSearch,
    /// Applies already-parsed filter criteria.
    SubmitFilter(FilterSpec),
    /// Applies raw form fields (`title`, `author`, `genre`).
    ///
    /// Missing fields count as empty or `"any"`.
    SubmitSearchForm(BTreeMap<String, String>),

    /// Reveals the next page of matches.
    ShowMore,
    /// A preview card was clicked.
    SelectPreview(String),
    /// Closes the detail card.
    CloseDetail,

    /// Opens the theme settings.
    OpenSettings,
    /// Closes the theme settings without changing the theme.
    CancelSettings,
    /// Applies the chosen theme.
    ChangeTheme(ThemeMode),
}

/// Processes an event, mutates state, and returns the actions to render.
///
/// # Errors
///
/// Lookups of unknown book ids are not errors: the interaction is ignored and
/// no action is returned. Any other failure is propagated.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<Vec<Action>> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Init => {
            let first_page = state.previews(state.catalog.initial_page());
            Ok(vec![
                Action::PopulateFilters {
                    genres: genre_options(state.catalog.genres()),
                    authors: author_options(state.catalog.authors()),
                },
                Action::ApplyTheme(state.theme.clone()),
                Action::ReplaceList(first_page),
                Action::ToggleEmptyMessage(state.catalog.matches().is_empty()),
                Action::UpdateShowMore(state.show_more_label()),
            ])
        }
        Event::OpenSearch => {
            state.overlay = Some(Overlay::Search);
            Ok(vec![Action::OpenOverlay(Overlay::Search)])
        }
        Event::CancelSearch => Ok(close_overlay(state, Overlay::Search)),
        Event::SubmitFilter(spec) => Ok(submit_filter(state, spec)),
        Event::SubmitSearchForm(form) => {
            let spec = FilterSpec::from_form(form);
            Ok(submit_filter(state, &spec))
        }
        Event::ShowMore => {
            if !state.catalog.has_more() {
                tracing::debug!(page = state.catalog.page(), "show more ignored, nothing remaining");
                return Ok(vec![]);
            }

            let page = state.catalog.advance_page();
            Ok(vec![
                Action::AppendList(state.previews(&page.items)),
                Action::UpdateShowMore(state.show_more_label()),
            ])
        }
        Event::SelectPreview(id) => match state.catalog.resolve_by_id(id) {
            Ok(book) => {
                let detail = state.detail(book);
                tracing::debug!(id = %id, title = %detail.title, "showing book detail");
                state.overlay = Some(Overlay::Detail);
                Ok(vec![Action::ShowDetail(detail)])
            }
            Err(BookConnectError::NotFound(_)) => {
                tracing::debug!(id = %id, "ignoring selection of unknown book");
                Ok(vec![])
            }
            Err(e) => Err(e),
        },
        Event::CloseDetail => Ok(close_overlay(state, Overlay::Detail)),
        Event::OpenSettings => {
            state.overlay = Some(Overlay::Settings);
            Ok(vec![Action::OpenOverlay(Overlay::Settings)])
        }
        Event::CancelSettings => Ok(close_overlay(state, Overlay::Settings)),
        Event::ChangeTheme(mode) => {
            tracing::debug!(from = %state.theme_mode, to = %mode, "changing theme");
            state.theme_mode = *mode;
            state.theme = Theme::from_mode(*mode);

            let mut actions = vec![Action::ApplyTheme(state.theme.clone())];
            actions.extend(close_overlay(state, Overlay::Settings));
            Ok(actions)
        }
    }
}

fn submit_filter(state: &mut AppState, spec: &FilterSpec) -> Vec<Action> {
    let result = state.catalog.apply_filter(spec);

    let mut actions = vec![
        Action::ReplaceList(state.previews(&result.first_page)),
        Action::ToggleEmptyMessage(result.is_empty()),
        Action::UpdateShowMore(state.show_more_label()),
        Action::ScrollToTop,
    ];
    actions.extend(close_overlay(state, Overlay::Search));
    actions
}

/// Closes `overlay` if it is the one open; otherwise nothing happens.
fn close_overlay(state: &mut AppState, overlay: Overlay) -> Vec<Action> {
    if state.overlay == Some(overlay) {
        state.overlay = None;
        vec![Action::CloseOverlay(overlay)]
    } else {
        vec![]
    }
}
