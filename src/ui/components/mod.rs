//! Composable terminal component renderers.
//!
//! Each component writes complete lines to any `std::io::Write` and returns
//! `io::Result<()>`. Components are stateless; the
//! [`TerminalRenderer`](crate::ui::TerminalRenderer) decides which ones to
//! draw for each action.
//!
//! # Components
//!
//! - [`header`]: Title bar and separator rules
//! - [`table`]: Numbered preview rows
//! - [`empty`]: "No results" message
//! - [`footer`]: "Show more" button and command hints
//! - [`detail`]: Detail card of one book
//! - [`search`]: Search and settings overlays

mod detail;
mod empty;
mod footer;
mod header;
mod search;
mod table;

pub use detail::render_detail;
pub use empty::{render_empty_state, EMPTY_MESSAGE};
pub use footer::{render_footer, render_show_more, COMMAND_HINTS};
pub use header::{render_header, render_rule};
pub use search::{render_search_overlay, render_settings_overlay};
pub use table::{render_table_headers, render_table_rows};
