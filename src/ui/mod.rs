//! User interface layer.
//!
//! The application never touches output directly. It emits
//! [`Action`](crate::app::Action)s, and a [`Renderer`] turns them into
//! visual changes. This module defines that contract, the display-ready view
//! models, the day/night palettes, and a terminal implementation.
//!
//! # Architecture
//!
//! ```text
//! Vec<Action> → dispatch → Renderer (TerminalRenderer → components → ANSI text)
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Previews, detail card, "show more" label, dropdown options
//! - [`renderer`]: The `Renderer` trait, `dispatch` and full repaint
//! - [`terminal`]: ANSI terminal renderer over any `Write`
//! - [`components`]: Stateless line renderers used by the terminal renderer
//! - [`helpers`]: Char-aware padding, truncation and wrapping
//! - [`theme`]: Day/night palettes and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod terminal;
pub mod theme;
pub mod viewmodel;

pub use renderer::{dispatch, render, Renderer};
pub use terminal::TerminalRenderer;
pub use theme::{Theme, ThemeMode};
pub use viewmodel::{BookDetail, BookPreview, DropdownOption, ShowMoreLabel};
