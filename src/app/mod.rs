//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the front end (the terminal loop in `main.rs`, or
//! any other [`Renderer`](crate::ui::Renderer)) and the domain layer.
//!
//! # Architecture
//!
//! ```text
//! User Input → Event → handle_event → CatalogState transition → Vec<Action> → Renderer
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Filtered, paginated catalog state (the core)
//! - [`actions`]: Visual commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Overlay state
//! - [`state`]: Application state container

pub mod actions;
pub mod catalog;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use catalog::{CatalogState, FilterResult, PageResult};
pub use handler::{handle_event, Event};
pub use modes::Overlay;
pub use state::AppState;
