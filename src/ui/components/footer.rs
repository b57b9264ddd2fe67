//! Footer renderer: the "show more" button and command hints.

use crate::ui::helpers::write_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ShowMoreLabel;
use std::io::{self, Write};

/// Command hints shown under the button.
pub const COMMAND_HINTS: &str =
    "search title=.. author=.. genre=..  more  show <# or id>  close  theme day|night  quit";

/// Renders the "show more" button, dimmed when disabled.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn render_show_more<W: Write + ?Sized>(
    out: &mut W,
    label: &ShowMoreLabel,
    theme: &Theme,
    cols: usize,
) -> io::Result<()> {
    if label.enabled {
        write!(out, "{}{}", Theme::bold(), Theme::fg(&theme.colors.accent))?;
    } else {
        write!(out, "{}{}", Theme::dim(), Theme::fg(&theme.colors.color_dark))?;
    }
    write_centered(out, &format!("[ {label} ]"), cols)?;
    writeln!(out, "{}", Theme::reset())
}

/// Renders the command hints line.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn render_footer<W: Write + ?Sized>(out: &mut W, theme: &Theme, cols: usize) -> io::Result<()> {
    write!(out, "{}{}", Theme::dim(), Theme::fg(&theme.colors.color_dark))?;
    write_centered(out, COMMAND_HINTS, cols)?;
    writeln!(out, "{}", Theme::reset())
}
