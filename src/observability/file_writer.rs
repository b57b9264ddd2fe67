//! Rotating log file writer with size-based rotation and backup retention.
//!
//! When the log file grows past a size threshold it is renamed with a
//! timestamp suffix and a fresh file is started. Only the newest few backups
//! are kept.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Log file writer that rotates by size.
///
/// Not synchronized itself; [`init_tracing`](super::init_tracing) wraps it in
/// a `Mutex`, which `tracing-subscriber` accepts as a writer factory.
///
/// # Rotation Strategy
///
/// 1. Before each write, check the current file size
/// 2. If it exceeds the limit, rename it to `<name>.<unix_timestamp_nanos>`
/// 3. Remove the oldest backups beyond the retention limit
/// 4. Reopen a fresh file on the next write
///
/// # Example
///
/// ```rust
/// use std::io::Write;
/// use bookconnect::observability::FileWriter;
///
/// let dir = std::env::temp_dir();
/// let mut writer = FileWriter::new(dir.join("bookconnect-doc.log"));
/// writeln!(writer, "catalog loaded").unwrap();
/// ```
pub struct FileWriter {
    file_path: PathBuf,
    /// Opened lazily on first write.
    file: Option<File>,
    max_bytes: u64,
    max_backups: usize,
}

impl FileWriter {
    /// Creates a writer with the default limits (10 MB, 3 backups).
    ///
    /// The file is not opened until the first write.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            file: None,
            max_bytes,
            max_backups,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn check_and_rotate(&mut self) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_bytes {
                self.file = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    fn rotate_files(&self) -> io::Result<()> {
        let suffix = chrono::Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or_default();
        let backup_path = PathBuf::from(format!("{}.{suffix}", self.file_path.display()));

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()
    }

    /// Deletes backups beyond the retention limit, newest kept first.
    ///
    /// Individual deletion failures are ignored.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = match self.file_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let Some(file_name) = self.file_path.file_name().and_then(|s| s.to_str()) else {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "invalid log file name"));
        };
        let prefix = format!("{file_name}.");

        let mut backups: Vec<(u128, PathBuf)> = fs::read_dir(parent_dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter_map(|path| {
                let stamp = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .and_then(|name| name.strip_prefix(&prefix))
                    .and_then(|rest| rest.parse::<u128>().ok())?;
                Some((stamp, path))
            })
            .collect();

        backups.sort_by(|a, b| b.0.cmp(&a.0));

        for (_, old_backup) in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl Write for FileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.check_and_rotate()?;

        if self.file.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            self.file = Some(file);
        }

        match self.file.as_mut() {
            Some(file) => file.write(buf),
            None => Err(io::Error::new(io::ErrorKind::Other, "log file unavailable")),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.as_mut().map_or(Ok(()), Write::flush)
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backups(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with("test.log."))
            .count()
    }

    #[test]
    fn writes_lazily_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.log");
        let mut writer = FileWriter::new(path.clone());
        assert_eq!(writer.path(), path.as_path());
        assert!(!path.exists());

        writeln!(writer, "first").unwrap();
        writeln!(writer, "second").unwrap();
        writer.flush().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn rotates_when_over_limit_and_keeps_backups_bounded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.log");
        let mut writer = FileWriter::with_limits(path.clone(), 8, 2);

        for i in 0..6 {
            writer.write_all(format!("line number {i}\n").as_bytes()).unwrap();
        }
        writer.flush().unwrap();

        assert!(backups(dir.path()) <= 2);
        assert!(backups(dir.path()) >= 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "line number 5\n");
    }
}
