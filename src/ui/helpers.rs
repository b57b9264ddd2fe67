//! Shared text layout helpers for the terminal renderer.
//!
//! All widths are counted in `char`s, not bytes, so titles with accented
//! characters pad and truncate correctly.

use std::io::{self, Write};

/// Truncates `text` to at most `width` chars, ending with `...` when cut.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let mut out: String = text.chars().take(width - 3).collect();
    out.push_str("...");
    out
}

/// Writes `text` and pads with spaces up to `cols` chars.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_padded<W: Write + ?Sized>(out: &mut W, text: &str, cols: usize) -> io::Result<()> {
    let len = text.chars().count();
    write!(out, "{text}{}", " ".repeat(cols.saturating_sub(len)))
}

/// Writes `text` centered within `cols` chars. Left padding wins on odd splits.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_centered<W: Write + ?Sized>(out: &mut W, text: &str, cols: usize) -> io::Result<()> {
    let len = text.chars().count().min(cols);
    let padding = (cols.saturating_sub(len) + 1) / 2;
    write!(out, "{}", " ".repeat(padding))?;
    write_padded(out, text, cols.saturating_sub(padding))
}

/// Word-wraps `text` into lines of at most `width` chars.
///
/// Words longer than `width` are placed on their own line unbroken.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Anna Karenina", 8), "Anna ...");
        assert_eq!(truncate("Élégie", 5), "Él...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn centered_pads_both_sides() {
        let mut out = Vec::new();
        write_centered(&mut out, "ab", 7).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "   ab  ");
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
        assert!(wrap("   ", 10).is_empty());
        assert_eq!(wrap("supercalifragilistic ok", 5), vec!["supercalifragilistic", "ok"]);
    }
}
