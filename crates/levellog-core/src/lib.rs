//! levellog core
//!
//! A small leveled logger. Messages at or above a minimum [`Severity`] are
//! appended to a log file as
//! `YYYY-MM-DD HH:MM:SS - <file>:<line> - <LEVEL> - <message>`; a logger built
//! without a file path prints raw lines to stdout instead. [`NoOpLogger`]
//! implements the same [`Logger`] capability set and discards everything.
//!
//! Loggers are passed around explicitly as [`BoxedLogger`] or
//! [`SharedLogger`]; there is no process-wide instance.
//!
//! ```no_run
//! use levellog_core::{log_info, new_logger, Logger, LoggerExt, Severity};
//!
//! let logger = new_logger("/var/log/app.log", Severity::Warning)?;
//! logger.info("skipped, below WARNING");
//! logger.warning("disk almost full");
//! log_info!(logger, "{} jobs queued", 12);
//! logger.close()?;
//! # Ok::<(), levellog_core::LogError>(())
//! ```
//!
//! ## Configuration
//!
//! [`LoggerConfig`] reads the same settings from YAML and `LEVELLOG_*`
//! environment variables and builds either logger variant.

pub mod config;
pub mod logging;

pub use logging::{
    new_logger, null_logger, BoxedLogger, LevelLogger, LogError, LogResult, Logger, LoggerExt,
    MemorySink, NoOpLogger, Severity, SharedLogger, FATAL_EXIT_CODE, TIMESTAMP_FORMAT,
};

pub use config::LoggerConfig;
