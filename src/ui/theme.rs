//! Day/night theme palettes and ANSI escape sequence generation.
//!
//! A theme is a pair of RGB triples, `color_dark` (text) and `color_light`
//! (surfaces), plus an accent. The night palette is the day palette with dark
//! and light swapped. Built-in palettes are embedded TOML files; custom
//! palettes can be loaded from disk.
//!
//! # TOML Format
//!
//! ```toml
//! name = "sepia"
//!
//! [colors]
//! color_dark = "60, 40, 20"
//! color_light = "250, 240, 220"
//! accent = "180, 90, 30"
//! ```
//!
//! # Example
//!
//! ```rust
//! use bookconnect::ui::theme::{Theme, ThemeMode};
//!
//! let theme = Theme::from_mode(ThemeMode::Night);
//! assert_eq!(theme.colors.color_dark, "255, 255, 255");
//! print!("{}text{}", Theme::fg(&theme.colors.color_dark), Theme::reset());
//! ```

use crate::domain::error::{BookConnectError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// The two built-in color schemes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Day,
    Night,
}

impl ThemeMode {
    /// Picks the mode matching a system dark-mode preference.
    #[must_use]
    pub const fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Night
        } else {
            Self::Day
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = BookConnectError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "night" => Ok(Self::Night),
            other => Err(BookConnectError::Theme(format!("unknown theme mode '{other}'"))),
        }
    }
}

/// Color palette for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    pub colors: ThemeColors,
}

/// Palette entries, each an `"r, g, b"` triple.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Foreground: text, borders.
    pub color_dark: String,
    /// Background: surfaces, cards.
    pub color_light: String,
    /// Highlights: the "show more" button, selected ids.
    pub accent: String,
}

impl Theme {
    /// Returns the built-in palette for `mode`.
    ///
    /// # Panics
    ///
    /// Panics if an embedded palette fails to parse (should never occur).
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        Self::from_name(mode.as_str())
            .expect("built-in day and night themes should always parse")
    }

    /// Loads a built-in palette by name (`day` or `night`).
    ///
    /// Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "day" => include_str!("../../themes/day.toml"),
            "night" => include_str!("../../themes/night.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a palette from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`BookConnectError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| BookConnectError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| BookConnectError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Parses an `"r, g, b"` triple. Malformed input yields white.
    fn parse_rgb(triple: &str) -> (u8, u8, u8) {
        let mut parts = triple.split(',').map(|p| p.trim().parse::<u8>());
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Ok(r)), Some(Ok(g)), Some(Ok(b)), None) => (r, g, b),
            _ => (255, 255, 255),
        }
    }

    /// ANSI 24-bit foreground escape for an `"r, g, b"` triple.
    #[must_use]
    pub fn fg(triple: &str) -> String {
        let (r, g, b) = Self::parse_rgb(triple);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for an `"r, g, b"` triple.
    #[must_use]
    pub fn bg(triple: &str) -> String {
        let (r, g, b) = Self::parse_rgb(triple);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_mode(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn night_swaps_day_colors() {
        let day = Theme::from_mode(ThemeMode::Day);
        let night = Theme::from_mode(ThemeMode::Night);
        assert_eq!(day.colors.color_dark, "10, 10, 20");
        assert_eq!(day.colors.color_light, "255, 255, 255");
        assert_eq!(night.colors.color_dark, day.colors.color_light);
        assert_eq!(night.colors.color_light, day.colors.color_dark);
    }

    #[test]
    fn preference_selects_mode() {
        assert_eq!(ThemeMode::from_preference(true), ThemeMode::Night);
        assert_eq!(ThemeMode::from_preference(false), ThemeMode::Day);
        assert_eq!(ThemeMode::Day.toggled(), ThemeMode::Night);
    }

    #[test]
    fn parses_mode_names() {
        assert_eq!("Night".parse::<ThemeMode>().unwrap(), ThemeMode::Night);
        assert_eq!(" day ".parse::<ThemeMode>().unwrap(), ThemeMode::Day);
        assert!("dusk".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn unknown_builtin_name_is_none() {
        assert!(Theme::from_name("catppuccin").is_none());
    }

    #[test]
    fn ansi_escapes_from_triples() {
        assert_eq!(Theme::fg("10, 10, 20"), "\u{1b}[38;2;10;10;20m");
        assert_eq!(Theme::bg("1,2,3"), "\u{1b}[48;2;1;2;3m");
        assert_eq!(Theme::fg("not a color"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::fg("1, 2, 3, 4"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn loads_custom_theme_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "name = \"sepia\"\n\n[colors]\ncolor_dark = \"60, 40, 20\"\ncolor_light = \"250, 240, 220\"\naccent = \"180, 90, 30\""
        )
        .unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "sepia");
        assert_eq!(theme.colors.accent, "180, 90, 30");
    }

    #[test]
    fn invalid_theme_file_is_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = ").unwrap();
        assert!(matches!(Theme::from_file(file.path()), Err(BookConnectError::Theme(_))));
    }
}
