//! Infrastructure layer for filesystem and environment interactions.

pub mod paths;
pub mod terminal;

pub use paths::{expand_tilde, get_data_dir};
pub use terminal::terminal_prefers_dark;
