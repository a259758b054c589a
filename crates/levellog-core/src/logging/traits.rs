//! Logger trait definition

use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use super::error::LogResult;
use super::level::Severity;

/// Capability set shared by the real and the null logger
///
/// Implementations:
/// - `LevelLogger`: console and/or file output gated by a minimum severity
/// - `NoOpLogger`: discards everything
///
/// This is the object-safe core. Call sites go through [`LoggerExt`] or the
/// `log_*!` macros, which record the caller's source location.
pub trait Logger: Send + Sync {
    /// Whether a record at `level` would reach the file sink
    fn enabled(&self, level: Severity) -> bool;

    /// Write a raw line to the console sink, if one is bound
    fn write_console(&self, args: fmt::Arguments<'_>);

    /// Write a leveled record attributed to `caller`
    ///
    /// Never terminates the process, even for `Severity::Fatal`.
    fn write_record(
        &self,
        level: Severity,
        args: fmt::Arguments<'_>,
        caller: &'static Location<'static>,
    );

    /// Write a FATAL record, close the file and exit the process
    fn write_fatal(&self, args: fmt::Arguments<'_>, caller: &'static Location<'static>);

    /// Release the file handle, if one is held
    fn close(&self) -> LogResult<()>;
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Logger>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Leveled logging methods
///
/// Implemented for every [`Logger`], including `dyn Logger`. The methods are
/// `#[track_caller]`, so the file and line written to the log are those of
/// the code calling them.
pub trait LoggerExt: Logger {
    /// Print to the console sink, ignoring the minimum level
    fn console(&self, message: &str) {
        self.write_console(format_args!("{message}"));
    }

    fn console_fmt(&self, args: fmt::Arguments<'_>) {
        self.write_console(args);
    }

    /// Print to the console and write an INFO record
    #[track_caller]
    fn console_info(&self, message: &str) {
        self.console_info_fmt(format_args!("{message}"));
    }

    #[track_caller]
    fn console_info_fmt(&self, args: fmt::Arguments<'_>) {
        self.write_console(args);
        self.write_record(Severity::Info, args, Location::caller());
    }

    /// Log a message at an arbitrary level
    #[track_caller]
    fn log(&self, level: Severity, message: &str) {
        self.write_record(level, format_args!("{message}"), Location::caller());
    }

    #[track_caller]
    fn trace(&self, message: &str) {
        self.write_record(Severity::Trace, format_args!("{message}"), Location::caller());
    }

    #[track_caller]
    fn debug(&self, message: &str) {
        self.write_record(Severity::Debug, format_args!("{message}"), Location::caller());
    }

    #[track_caller]
    fn info(&self, message: &str) {
        self.write_record(Severity::Info, format_args!("{message}"), Location::caller());
    }

    #[track_caller]
    fn warning(&self, message: &str) {
        self.write_record(Severity::Warning, format_args!("{message}"), Location::caller());
    }

    #[track_caller]
    fn error(&self, message: &str) {
        self.write_record(Severity::Error, format_args!("{message}"), Location::caller());
    }

    /// Log at FATAL and terminate the process
    ///
    /// The null logger returns normally instead.
    #[track_caller]
    fn fatal(&self, message: &str) {
        self.write_fatal(format_args!("{message}"), Location::caller());
    }

    #[track_caller]
    fn trace_fmt(&self, args: fmt::Arguments<'_>) {
        self.write_record(Severity::Trace, args, Location::caller());
    }

    #[track_caller]
    fn debug_fmt(&self, args: fmt::Arguments<'_>) {
        self.write_record(Severity::Debug, args, Location::caller());
    }

    #[track_caller]
    fn info_fmt(&self, args: fmt::Arguments<'_>) {
        self.write_record(Severity::Info, args, Location::caller());
    }

    #[track_caller]
    fn warning_fmt(&self, args: fmt::Arguments<'_>) {
        self.write_record(Severity::Warning, args, Location::caller());
    }

    #[track_caller]
    fn error_fmt(&self, args: fmt::Arguments<'_>) {
        self.write_record(Severity::Error, args, Location::caller());
    }

    #[track_caller]
    fn fatal_fmt(&self, args: fmt::Arguments<'_>) {
        self.write_fatal(args, Location::caller());
    }
}

impl<T: Logger + ?Sized> LoggerExt for T {}

/// Convenience macros for logging with format arguments
#[macro_export]
macro_rules! log_console {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::LoggerExt as _;
        $logger.console_fmt(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_console_info {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::LoggerExt as _;
        $logger.console_info_fmt(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::LoggerExt as _;
        $logger.trace_fmt(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::LoggerExt as _;
        $logger.debug_fmt(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::LoggerExt as _;
        $logger.info_fmt(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::LoggerExt as _;
        $logger.warning_fmt(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::LoggerExt as _;
        $logger.error_fmt(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::LoggerExt as _;
        $logger.fatal_fmt(format_args!($($arg)*))
    }};
}
