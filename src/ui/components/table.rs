//! Preview list renderer.
//!
//! Each preview is one row: a running number, the title, and the author.
//! The number doubles as the handle for selecting a book in the terminal
//! front end, alongside its id.

use crate::ui::helpers::{truncate, write_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BookPreview;
use std::io::{self, Write};

/// Width of the running-number column, including trailing space.
const NUMBER_WIDTH: usize = 5;

/// Minimum width given to the title column on narrow terminals.
const MIN_TITLE_WIDTH: usize = 12;

/// Renders the column headers.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn render_table_headers<W: Write + ?Sized>(out: &mut W, theme: &Theme, cols: usize) -> io::Result<()> {
    let title_width = title_width(cols);
    write!(out, "{}{}", Theme::bold(), Theme::fg(&theme.colors.color_dark))?;
    write!(out, "{:<width$}", "#", width = NUMBER_WIDTH)?;
    write_padded(out, "TITLE", title_width)?;
    write!(out, " AUTHOR")?;
    writeln!(out, "{}", Theme::reset())
}

/// Renders preview rows numbered from `first_number`.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn render_table_rows<W: Write + ?Sized>(
    out: &mut W,
    items: &[BookPreview],
    first_number: usize,
    theme: &Theme,
    cols: usize,
) -> io::Result<()> {
    for (offset, item) in items.iter().enumerate() {
        render_table_row(out, first_number + offset, item, theme, cols)?;
    }
    Ok(())
}

fn render_table_row<W: Write + ?Sized>(
    out: &mut W,
    number: usize,
    item: &BookPreview,
    theme: &Theme,
    cols: usize,
) -> io::Result<()> {
    let title_width = title_width(cols);
    let author_width = cols.saturating_sub(NUMBER_WIDTH + title_width + 1);

    write!(out, "{}", Theme::fg(&theme.colors.accent))?;
    write!(out, "{:<width$}", format!("{number}."), width = NUMBER_WIDTH)?;
    write!(out, "{}", Theme::fg(&theme.colors.color_dark))?;
    write_padded(out, &truncate(&item.title, title_width), title_width)?;
    write!(out, " {}", Theme::dim())?;
    write!(out, "{}", truncate(&item.author, author_width))?;
    writeln!(out, "{}", Theme::reset())
}

/// Title column takes roughly two thirds of the space after the number column.
fn title_width(cols: usize) -> usize {
    (cols.saturating_sub(NUMBER_WIDTH) * 2 / 3).max(MIN_TITLE_WIDTH)
}
