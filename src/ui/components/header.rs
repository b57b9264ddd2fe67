//! Header component renderer.
//!
//! Renders the application title bar with centered bold text.

use crate::ui::helpers::write_centered;
use crate::ui::theme::Theme;
use std::io::{self, Write};

/// Renders the title bar followed by a rule line.
///
/// # Layout
///
/// ```text
/// [left padding] Book Connect (N) [right padding]
/// ────────────────────────────────────────────────
/// ```
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn render_header<W: Write + ?Sized>(
    out: &mut W,
    title: &str,
    theme: &Theme,
    cols: usize,
) -> io::Result<()> {
    write!(out, "{}{}", Theme::bold(), Theme::fg(&theme.colors.color_dark))?;
    write!(out, "{}", Theme::bg(&theme.colors.color_light))?;
    write_centered(out, title, cols)?;
    writeln!(out, "{}", Theme::reset())?;
    render_rule(out, theme, cols)
}

/// Renders a horizontal separator line.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn render_rule<W: Write + ?Sized>(out: &mut W, theme: &Theme, cols: usize) -> io::Result<()> {
    writeln!(
        out,
        "{}{}{}",
        Theme::fg(&theme.colors.color_dark),
        "─".repeat(cols),
        Theme::reset()
    )
}
