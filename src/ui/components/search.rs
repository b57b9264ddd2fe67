//! Search and settings overlay renderers.
//!
//! The terminal has no form widgets, so an overlay lists the accepted values
//! of each field instead: dropdown options for author and genre, the two
//! theme modes for settings.

use crate::ui::helpers::truncate;
use crate::ui::theme::{Theme, ThemeMode};
use crate::ui::viewmodel::DropdownOption;
use std::io::{self, Write};

/// Horizontal margin for overlay boxes.
const OVERLAY_MARGIN: usize = 2;

/// Renders the search form: usage line followed by the genre and author choices.
///
/// # Layout
///
/// ```text
///   ┌──────────────────────────────┐
///   │ Search                       │
///   │ title=<text> author=<id> ... │
///   │ Genres: any (All Genres), .. │
///   │ Authors: any (All Authors),..│
///   └──────────────────────────────┘
/// ```
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn render_search_overlay<W: Write + ?Sized>(
    out: &mut W,
    genres: &[DropdownOption],
    authors: &[DropdownOption],
    theme: &Theme,
    cols: usize,
) -> io::Result<()> {
    let lines = [
        "Search".to_string(),
        "title=<text> author=<id> genre=<id>".to_string(),
        format!("Genres: {}", describe_options(genres)),
        format!("Authors: {}", describe_options(authors)),
    ];
    render_box(out, &lines, theme, cols)
}

/// Renders the theme picker with the active mode marked.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn render_settings_overlay<W: Write + ?Sized>(
    out: &mut W,
    current: &str,
    theme: &Theme,
    cols: usize,
) -> io::Result<()> {
    let mark = |mode: ThemeMode| if mode.as_str() == current { "*" } else { " " };
    let lines = [
        "Settings".to_string(),
        format!(
            "theme {}day  {}night",
            mark(ThemeMode::Day),
            mark(ThemeMode::Night)
        ),
    ];
    render_box(out, &lines, theme, cols)
}

fn describe_options(options: &[DropdownOption]) -> String {
    options
        .iter()
        .map(|o| format!("{} ({})", o.value, o.label))
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_box<W: Write + ?Sized>(
    out: &mut W,
    lines: &[String],
    theme: &Theme,
    cols: usize,
) -> io::Result<()> {
    let box_width = cols.saturating_sub(OVERLAY_MARGIN * 2).max(4);
    let inner_width = box_width - 2;
    let margin = " ".repeat(OVERLAY_MARGIN);
    let border = Theme::fg(&theme.colors.accent);
    let text = Theme::fg(&theme.colors.color_dark);

    writeln!(out, "{margin}{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset())?;
    for line in lines {
        let line = truncate(&format!(" {line}"), inner_width);
        let padding = inner_width.saturating_sub(line.chars().count());
        writeln!(
            out,
            "{margin}{border}│{text}{line}{}{border}│{}",
            " ".repeat(padding),
            Theme::reset()
        )?;
    }
    writeln!(out, "{margin}{border}└{}┘{}", "─".repeat(inner_width), Theme::reset())
}
