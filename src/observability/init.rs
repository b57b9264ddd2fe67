//! Tracing initialization and subscriber setup.
//!
//! Installs a `tracing-subscriber` registry that filters by level and writes
//! formatted events to a rotating log file in the data directory.

use super::file_writer::FileWriter;
use crate::infrastructure::get_data_dir;
use crate::Config;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the data directory.
pub const LOG_FILE_NAME: &str = "bookconnect.log";

/// Initializes the global tracing subscriber.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` if set and valid
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # File Location
///
/// Events go to `<data_dir>/bookconnect.log`, where `data_dir` is
/// `config.data_dir` or [`get_data_dir`].
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently gives up if the directory cannot be created (logging is optional)
/// - Idempotent: only the first call takes effect
///
/// # Example
///
/// ```rust
/// use bookconnect::observability::init_tracing;
/// use bookconnect::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     data_dir: Some(std::env::temp_dir().join("bookconnect-doc")),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let data_dir = config.data_dir.clone().unwrap_or_else(get_data_dir);
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = FileWriter::new(data_dir.join(LOG_FILE_NAME));
    let log_file = writer.path().to_path_buf();
    let layer = fmt::layer()
        .with_writer(Mutex::new(writer))
        .with_ansi(false)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();

    tracing::debug!(level, log_file = %log_file.display(), "tracing initialized");
}
