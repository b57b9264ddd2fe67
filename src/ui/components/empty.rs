//! Empty state component renderer.
//!
//! Rendered in place of the list when a search matches no books.

use crate::ui::helpers::write_centered;
use crate::ui::theme::Theme;
use std::io::{self, Write};

/// Primary empty-state text.
pub const EMPTY_MESSAGE: &str = "No results found. Your filters might be too narrow.";

/// Secondary hint under the empty-state text.
pub const EMPTY_SUBTITLE: &str = "Try a shorter title or choose \"any\" for author and genre.";

/// Renders the centered two-line empty-state message.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn render_empty_state<W: Write + ?Sized>(out: &mut W, theme: &Theme, cols: usize) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{}", Theme::fg(&theme.colors.accent))?;
    write_centered(out, EMPTY_MESSAGE, cols)?;
    writeln!(out, "{}", Theme::reset())?;

    write!(out, "{}{}", Theme::dim(), Theme::fg(&theme.colors.color_dark))?;
    write_centered(out, EMPTY_SUBTITLE, cols)?;
    writeln!(out, "{}", Theme::reset())
}
