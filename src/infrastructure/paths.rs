//! Path resolution for the data directory and user-supplied paths.
//!
//! The data directory holds the log file. It is resolved, in order, from
//! `$XDG_DATA_HOME/bookconnect`, then `$HOME/.local/share/bookconnect`, and
//! finally a `.bookconnect` directory under the working directory.

use std::path::PathBuf;

/// Directory name used under the platform data directory.
const APP_DIR: &str = "bookconnect";

/// Returns the data directory for the current environment.
///
/// # Examples
///
/// ```
/// use bookconnect::infrastructure::get_data_dir;
///
/// let dir = get_data_dir();
/// assert!(dir.ends_with("bookconnect") || dir.ends_with(".bookconnect"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    let xdg = std::env::var("XDG_DATA_HOME").ok();
    let home = std::env::var("HOME").ok();
    data_dir_from(xdg.as_deref(), home.as_deref())
}

/// Resolves the data directory from explicit environment values.
#[must_use]
pub fn data_dir_from(xdg_data_home: Option<&str>, home: Option<&str>) -> PathBuf {
    match (xdg_data_home.filter(|s| !s.is_empty()), home.filter(|s| !s.is_empty())) {
        (Some(xdg), _) => PathBuf::from(xdg).join(APP_DIR),
        (None, Some(home)) => PathBuf::from(home).join(".local").join("share").join(APP_DIR),
        (None, None) => PathBuf::from(format!(".{APP_DIR}")),
    }
}

/// Expands a leading `~` to `$HOME`. Other paths are returned unchanged.
///
/// # Examples
///
/// ```
/// use bookconnect::infrastructure::paths::expand_tilde_with;
///
/// assert_eq!(expand_tilde_with("~/books.json", Some("/home/ada")), "/home/ada/books.json");
/// assert_eq!(expand_tilde_with("~", Some("/home/ada")), "/home/ada");
/// assert_eq!(expand_tilde_with("/abs/books.json", Some("/home/ada")), "/abs/books.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    expand_tilde_with(path, std::env::var("HOME").ok().as_deref())
}

/// [`expand_tilde`] with an explicit home directory.
#[must_use]
pub fn expand_tilde_with(path: &str, home: Option<&str>) -> String {
    match home {
        Some(home) if path == "~" => home.to_string(),
        Some(home) if path.starts_with("~/") => path.replacen('~', home, 1),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_xdg_data_home() {
        assert_eq!(
            data_dir_from(Some("/xdg"), Some("/home/ada")),
            PathBuf::from("/xdg/bookconnect")
        );
    }

    #[test]
    fn falls_back_to_home() {
        assert_eq!(
            data_dir_from(Some(""), Some("/home/ada")),
            PathBuf::from("/home/ada/.local/share/bookconnect")
        );
        assert_eq!(data_dir_from(None, None), PathBuf::from(".bookconnect"));
    }

    #[test]
    fn tilde_without_home_is_untouched() {
        assert_eq!(expand_tilde_with("~/x", None), "~/x");
    }
}
