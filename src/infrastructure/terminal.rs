//! Terminal environment hints.

/// Reads the terminal's dark-background hint from `COLORFGBG`.
///
/// Returns `None` when the variable is unset or unreadable.
#[must_use]
pub fn terminal_prefers_dark() -> Option<bool> {
    prefers_dark_from(std::env::var("COLORFGBG").ok().as_deref())
}

/// Interprets a `COLORFGBG` value such as `"15;0"` or `"0;default;15"`.
///
/// The last field is the background color index. Indices 0-6 and 8 are the
/// dark ANSI colors.
///
/// # Examples
///
/// ```
/// use bookconnect::infrastructure::terminal::prefers_dark_from;
///
/// assert_eq!(prefers_dark_from(Some("15;0")), Some(true));
/// assert_eq!(prefers_dark_from(Some("0;default;15")), Some(false));
/// assert_eq!(prefers_dark_from(None), None);
/// ```
#[must_use]
pub fn prefers_dark_from(colorfgbg: Option<&str>) -> Option<bool> {
    let background = colorfgbg?.rsplit(';').next()?.trim().parse::<u8>().ok()?;
    Some(matches!(background, 0..=6 | 8))
}
