//! No-op logger implementation

use std::fmt;
use std::panic::Location;

use super::error::LogResult;
use super::level::Severity;
use super::traits::{BoxedLogger, Logger};

/// A logger that does nothing
///
/// Hand this out instead of a `LevelLogger` to switch logging off without
/// branching at call sites. `fatal` returns normally and `close` always
/// succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    /// Create a new no-op logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn enabled(&self, _level: Severity) -> bool {
        false
    }

    fn write_console(&self, _args: fmt::Arguments<'_>) {}

    fn write_record(
        &self,
        _level: Severity,
        _args: fmt::Arguments<'_>,
        _caller: &'static Location<'static>,
    ) {
    }

    fn write_fatal(&self, _args: fmt::Arguments<'_>, _caller: &'static Location<'static>) {}

    fn close(&self) -> LogResult<()> {
        Ok(())
    }
}

/// Boxed [`NoOpLogger`], the disabled counterpart of `new_logger`
pub fn null_logger() -> BoxedLogger {
    Box::new(NoOpLogger::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::traits::LoggerExt;

    #[test]
    fn test_noop_logger() {
        let logger = NoOpLogger::new();

        // These should all do nothing without panicking
        logger.console("console message");
        logger.console_info("console info message");
        logger.trace("trace message");
        logger.debug("debug message");
        logger.info("info message");
        logger.warning("warning message");
        logger.error("error message");
        logger.fatal("fatal message");

        assert!(logger.close().is_ok());
        assert!(logger.close().is_ok());
    }

    #[test]
    fn test_noop_logger_never_enabled() {
        let logger = null_logger();
        for level in Severity::ALL {
            assert!(!logger.enabled(level));
        }
        crate::log_error!(logger, "{} failed", "job");
        assert!(logger.close().is_ok());
    }
}
