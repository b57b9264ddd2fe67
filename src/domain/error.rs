//! Error types for Book Connect.
//!
//! This module defines the centralized error type [`BookConnectError`] and a type
//! alias [`Result`] used throughout the crate. All errors are implemented with the
//! `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Book Connect operations.
///
/// Only two variants are produced by the catalog core itself: [`Config`] at
/// construction time and [`NotFound`] from id lookups. The remaining variants
/// belong to the loaders around the core (catalog file, configuration file,
/// theme palettes).
///
/// [`Config`]: BookConnectError::Config
/// [`NotFound`]: BookConnectError::NotFound
///
/// # Examples
///
/// ```
/// use bookconnect::BookConnectError;
///
/// fn validate_page_size(page_size: usize) -> Result<(), BookConnectError> {
///     if page_size == 0 {
///         return Err(BookConnectError::Config("page size must be positive".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_page_size(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum BookConnectError {
    /// Construction parameters or configuration are invalid.
    ///
    /// Fatal at startup: the catalog cannot be brought into a valid state.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No book carries the requested identifier.
    ///
    /// Raised by [`CatalogState::resolve_by_id`](crate::app::CatalogState::resolve_by_id).
    /// Callers treat this as a stale or malformed interaction and ignore it.
    #[error("Book not found: {0}")]
    NotFound(String),

    /// Catalog data is structurally invalid (duplicate ids).
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// A theme palette could not be loaded or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON catalog data could not be deserialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for Book Connect operations.
pub type Result<T> = std::result::Result<T, BookConnectError>;
