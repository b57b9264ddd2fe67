//! Detail card renderer.

use crate::ui::helpers::{wrap, write_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BookDetail;
use std::io::{self, Write};

/// Renders the detail card: title, "author (year)" subtitle, cover URI and
/// the word-wrapped description.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn render_detail<W: Write + ?Sized>(
    out: &mut W,
    detail: &BookDetail,
    theme: &Theme,
    cols: usize,
) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{}{}", Theme::bold(), Theme::fg(&theme.colors.color_dark))?;
    write_centered(out, &detail.title, cols)?;
    writeln!(out, "{}", Theme::reset())?;

    write!(out, "{}{}", Theme::dim(), Theme::fg(&theme.colors.color_dark))?;
    write_centered(out, &detail.subtitle, cols)?;
    writeln!(out, "{}", Theme::reset())?;

    if !detail.image.is_empty() {
        writeln!(out, "{}{}{}", Theme::fg(&theme.colors.accent), detail.image, Theme::reset())?;
    }

    writeln!(out)?;
    write!(out, "{}", Theme::fg(&theme.colors.color_dark))?;
    for line in wrap(&detail.description, cols.max(1)) {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{}", Theme::reset())
}
