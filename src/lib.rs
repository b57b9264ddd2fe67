//! Book Connect: a browsable, filterable, paginated book catalog.
//!
//! The crate provides:
//! - A filtered and paginated view over a static catalog of books
//! - Case-insensitive title search combined with author and genre selection
//! - Incremental "show more" pagination with a remaining-count indicator
//! - Book detail lookup by identifier
//! - Day and night palettes
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal front end (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Catalog state (matches, page cursor)             │
//! │  - Event handling                                   │
//! │  - Action emission                                  │
//! └─────────────────────────────────────────────────────┘
//!         │                                    │
//! ┌───────────────────────┐   ┌──────────────────────────┐
//! │ UI Layer (ui/)        │   │ Catalog loading          │
//! │ - Renderer trait      │   │ (catalog/)               │
//! │ - View models         │   │ - JSON catalog files     │
//! │ - Theming, components │   │                          │
//! └───────────────────────┘   └──────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Book model and filter predicate (domain/)        │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber, rotating log file            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Catalog state and the event/action model
//! - [`catalog`]: Catalog file loading
//! - [`domain`]: Core domain types (Book, FilterSpec, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`ui`]: Renderer contract, view models, terminal rendering, themes
//! - [`observability`]: Log file setup
//!
//! # Configuration
//!
//! Configuration is an optional TOML file:
//!
//! ```toml
//! page_size = 36
//! theme = "night"
//! prefers_dark = true
//! trace_level = "debug"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use bookconnect::{handle_event, initialize, Catalog, Config, Event};
//!
//! let catalog = Catalog::from_json(r#"{
//!     "books": [{
//!         "id": "wp",
//!         "title": "War and Peace",
//!         "author": "a1",
//!         "genres": ["g1"],
//!         "image": "",
//!         "published": "1869-01-01T00:00:00Z",
//!         "description": ""
//!     }],
//!     "authors": { "a1": "Leo Tolstoy" },
//!     "genres": { "g1": "Fiction" }
//! }"#)?;
//!
//! let mut state = initialize(&Config::default(), catalog)?;
//! let actions = handle_event(&mut state, &Event::Init)?;
//! assert!(!actions.is_empty());
//! assert_eq!(state.catalog.visible_count(), 1);
//! # Ok::<(), bookconnect::BookConnectError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, CatalogState, Event, Overlay};
pub use catalog::Catalog;
pub use domain::{Book, BookConnectError, FilterSpec, Result};
pub use ui::{Theme, ThemeMode};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Books shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 36;

/// Application configuration.
///
/// Built from defaults, a string map, or a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Books revealed per page. Must be positive.
    ///
    /// `None` defers to the catalog's `books_per_page`, then 36.
    pub page_size: Option<usize>,

    /// Built-in theme name: `day` or `night`. Ignored if `theme_file` is set.
    pub theme: Option<String>,

    /// Path to a custom TOML palette. Takes precedence over `theme`.
    pub theme_file: Option<String>,

    /// Whether the system prefers a dark color scheme. Picks night over day
    /// when no theme is configured.
    pub prefers_dark: Option<bool>,

    /// Log level filter (`trace`, `debug`, `info`, `warn`, `error`). Default: `"info"`
    pub trace_level: Option<String>,

    /// Directory for the log file. Default: [`infrastructure::get_data_dir`]
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// Unparseable values are treated as unset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use bookconnect::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "12".to_string());
    /// map.insert("theme".to_string(), "night".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.page_size, Some(12));
    /// assert_eq!(config.theme.as_deref(), Some("night"));
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        Self {
            page_size: config.get("page_size").and_then(|s| s.trim().parse::<usize>().ok()),
            theme: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            prefers_dark: config.get("prefers_dark").and_then(|s| s.trim().parse::<bool>().ok()),
            trace_level: config.get("trace_level").cloned(),
            data_dir: config.get("data_dir").map(|dir| PathBuf::from(infrastructure::expand_tilde(dir))),
        }
    }

    /// Parses configuration from TOML. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BookConnectError::Config`] for malformed TOML, wrong value
    /// types, or unknown keys.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| BookConnectError::Config(e.to_string()))
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`BookConnectError::Config`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            BookConnectError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Page size to use with `catalog`.
    ///
    /// A configured page size wins, then the catalog's, then the default.
    #[must_use]
    pub fn effective_page_size(&self, catalog: &Catalog) -> usize {
        self.page_size
            .or(catalog.books_per_page)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Resolves the palette: theme file, then theme name, then the
    /// dark-mode preference.
    ///
    /// Unloadable themes fall back to the preference.
    #[must_use]
    pub fn resolve_theme(&self) -> (Theme, ThemeMode) {
        let preferred = || Theme::from_mode(ThemeMode::from_preference(self.prefers_dark.unwrap_or(false)));

        let theme = self.theme_file.as_ref().map_or_else(
            || {
                self.theme.as_ref().map_or_else(preferred, |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "unknown theme, using preferred");
                        preferred()
                    })
                })
            },
            |theme_file| {
                Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                    tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using preferred");
                    preferred()
                })
            },
        );

        let mode = theme.name.parse::<ThemeMode>().unwrap_or_default();
        (theme, mode)
    }
}

/// Builds the application state from configuration and a loaded catalog.
///
/// # Errors
///
/// Returns [`BookConnectError::Config`] if the page size is zero or the
/// catalog has books without author or genre tables.
///
/// # Example
///
/// ```rust
/// use bookconnect::{initialize, Catalog, Config};
///
/// let catalog = Catalog::from_json(r#"{ "books": [] }"#)?;
/// let config = Config { theme: Some("night".to_string()), ..Default::default() };
///
/// let state = initialize(&config, catalog)?;
/// assert_eq!(state.theme.name, "night");
/// assert_eq!(state.catalog.remaining(), 0);
/// # Ok::<(), bookconnect::BookConnectError>(())
/// ```
pub fn initialize(config: &Config, catalog: Catalog) -> Result<AppState> {
    let page_size = config.effective_page_size(&catalog);
    tracing::debug!(page_size, books = catalog.books.len(), "initializing book connect");

    let (theme, theme_mode) = config.resolve_theme();
    let catalog_state = CatalogState::new(catalog.books, catalog.authors, catalog.genres, page_size)?;

    Ok(AppState::new(catalog_state, theme, theme_mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn catalog(books_per_page: Option<usize>) -> Catalog {
        Catalog {
            books: Vec::new(),
            authors: domain::LookupTable::new(),
            genres: domain::LookupTable::new(),
            books_per_page,
        }
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.page_size, None);
        assert!(config.theme.is_none());
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn from_map_is_lenient() {
        let mut map = BTreeMap::new();
        map.insert("page_size".to_string(), "lots".to_string());
        map.insert("trace_level".to_string(), "debug".to_string());
        map.insert("prefers_dark".to_string(), "true".to_string());

        let config = Config::from_map(&map);
        assert_eq!(config.page_size, None);
        assert_eq!(config.prefers_dark, Some(true));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn from_toml_fills_missing_keys() {
        let config = Config::from_toml_str("page_size = 10\n").unwrap();
        assert_eq!(config.page_size, Some(10));
        assert_eq!(config.theme, None);
    }

    #[test]
    fn from_toml_rejects_unknown_keys_and_bad_types() {
        assert!(matches!(
            Config::from_toml_str("pagesize = 10\n"),
            Err(BookConnectError::Config(_))
        ));
        assert!(matches!(
            Config::from_toml_str("page_size = \"ten\"\n"),
            Err(BookConnectError::Config(_))
        ));
    }

    #[test]
    fn from_file_reads_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"night\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.theme.as_deref(), Some("night"));
        assert!(Config::from_file("/nonexistent/bookconnect.toml").is_err());
    }

    #[test]
    fn catalog_page_size_applies_only_over_default() {
        let shipped = catalog(Some(12));
        assert_eq!(Config::default().effective_page_size(&shipped), 12);

        let explicit = Config { page_size: Some(5), ..Default::default() };
        assert_eq!(explicit.effective_page_size(&shipped), 5);
        assert_eq!(Config::default().effective_page_size(&catalog(None)), 36);
    }

    #[test]
    fn explicit_default_page_size_is_kept() {
        let config = Config::from_toml_str("page_size = 36\n").unwrap();
        let state = initialize(&config, catalog(Some(12))).unwrap();
        assert_eq!(state.catalog.page_size(), 36);
    }

    #[test]
    fn dark_preference_applies_without_theme() {
        let dark = Config { prefers_dark: Some(true), ..Default::default() };
        let (theme, mode) = dark.resolve_theme();
        assert_eq!(theme.name, "night");
        assert_eq!(mode, ThemeMode::Night);

        let named = Config { theme: Some("day".to_string()), ..dark.clone() };
        assert_eq!(named.resolve_theme().1, ThemeMode::Day);

        let unknown = Config { theme: Some("sepia".to_string()), ..dark };
        assert_eq!(unknown.resolve_theme().1, ThemeMode::Night);
    }

    #[test]
    fn theme_resolution_order() {
        let (theme, mode) = Config::default().resolve_theme();
        assert_eq!(theme.name, "day");
        assert_eq!(mode, ThemeMode::Day);

        let named = Config { theme: Some("night".to_string()), ..Default::default() };
        assert_eq!(named.resolve_theme().1, ThemeMode::Night);

        let unknown = Config { theme: Some("sepia".to_string()), ..Default::default() };
        assert_eq!(unknown.resolve_theme().0.name, "day");

        let missing_file = Config {
            theme: Some("night".to_string()),
            theme_file: Some("/nonexistent/palette.toml".to_string()),
            ..Default::default()
        };
        assert_eq!(missing_file.resolve_theme().0.name, "day");
    }

    #[test]
    fn initialize_rejects_zero_page_size() {
        let config = Config { page_size: Some(0), ..Default::default() };
        assert!(matches!(
            initialize(&config, catalog(None)),
            Err(BookConnectError::Config(_))
        ));
    }
}
