//! Observability infrastructure.
//!
//! Structured logging through `tracing`, written to a size-rotated file so
//! that terminal output stays reserved for the catalog itself.
//!
//! # Modules
//!
//! - [`file_writer`]: Rotating log file writer with backup management
//! - [`init`]: Subscriber setup and level filtering

pub mod file_writer;
pub mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
