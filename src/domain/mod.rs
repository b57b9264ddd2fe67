//! Domain layer for Book Connect.
//!
//! Core types with no knowledge of rendering or loading: the book model, the
//! filter criteria and predicate, and the error type.
//!
//! # Organization
//!
//! - [`book`]: Book model and author/genre lookup tables
//! - [`filter`]: Filter criteria and the matching predicate
//! - [`error`]: Error types and result aliases
//!
//! # Examples
//!
//! ```
//! use bookconnect::domain::filter::{matches_filter, FilterSpec};
//! use bookconnect::domain::Book;
//! use chrono::Utc;
//!
//! let book = Book {
//!     id: "1".to_string(),
//!     title: "War and Peace".to_string(),
//!     author: "tolstoy".to_string(),
//!     genres: vec!["fiction".to_string()],
//!     image: String::new(),
//!     published: Utc::now(),
//!     description: String::new(),
//! };
//!
//! assert!(matches_filter(&book, &FilterSpec::any().with_title("WAR")));
//! ```

pub mod book;
pub mod error;
pub mod filter;

pub use book::{author_name, Book, LookupTable, UNKNOWN_AUTHOR};
pub use error::{BookConnectError, Result};
pub use filter::{matches_filter, FilterSpec, Selection};
