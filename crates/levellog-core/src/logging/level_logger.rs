//! Leveled console/file logger
//!
//! A `LevelLogger` built from an empty path prints raw lines to stdout. One
//! built from a file path appends formatted lines to that file, skipping any
//! record below its minimum severity:
//!
//! ```text
//! 2024-03-01 09:15:02 - worker.rs:88 - WARNING - queue is 90% full
//! ```
//!
//! Write failures are dropped. Only construction and `close` report errors.

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process;

use parking_lot::Mutex;

use super::error::{LogError, LogResult};
use super::fs::{create_log_file, open_log_file, parent_dir, path_exists, path_writable};
use super::level::Severity;
use super::line::format_line;
use super::traits::{BoxedLogger, Logger};

/// Exit status used by `fatal`
pub const FATAL_EXIT_CODE: i32 = 1;

type Sink = Box<dyn Write + Send>;

enum FileSink {
    /// Log file opened by `create`; released by `close`
    Owned { path: PathBuf, file: File },
    /// Caller-supplied writer, no handle to release
    Writer(Sink),
}

impl FileSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self {
            FileSink::Owned { file, .. } => file.write_all(line.as_bytes()),
            FileSink::Writer(writer) => {
                writer.write_all(line.as_bytes())?;
                writer.flush()
            }
        }
    }
}

/// Logger with an optional console sink and an optional file sink
pub struct LevelLogger {
    level: Severity,
    console: Option<Mutex<Sink>>,
    file: Mutex<Option<FileSink>>,
}

impl LevelLogger {
    /// Build a logger for `path`, or a console logger when `path` is empty
    ///
    /// The parent directory must already exist and be writable. An existing
    /// file is appended to; a missing one is created with mode 0600.
    pub fn create(path: impl AsRef<Path>, level: Severity) -> LogResult<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Ok(Self::console_only(level));
        }

        let dir = parent_dir(path);
        if !path_exists(dir) {
            return Err(LogError::PathNotFound(dir.to_path_buf()));
        }
        if !path_writable(dir) {
            return Err(LogError::PathNotWritable(dir.to_path_buf()));
        }

        let file = if path_exists(path) {
            open_log_file(path).map_err(|source| LogError::FileOpen {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            create_log_file(path).map_err(|source| LogError::FileCreate {
                path: path.to_path_buf(),
                source,
            })?
        };

        Ok(Self {
            level,
            console: None,
            file: Mutex::new(Some(FileSink::Owned {
                path: path.to_path_buf(),
                file,
            })),
        })
    }

    /// Logger that only prints to stdout
    pub fn console_only(level: Severity) -> Self {
        Self::with_sinks(Some(Box::new(io::stdout())), None, level)
    }

    /// Assemble a logger from arbitrary writers
    ///
    /// No file handle is owned, so `close` leaves the file writer in place.
    pub fn with_sinks(
        console: Option<Box<dyn Write + Send>>,
        file: Option<Box<dyn Write + Send>>,
        level: Severity,
    ) -> Self {
        Self {
            level,
            console: console.map(Mutex::new),
            file: Mutex::new(file.map(FileSink::Writer)),
        }
    }

    /// Minimum severity written to the file sink
    pub fn min_level(&self) -> Severity {
        self.level
    }

    pub fn has_console(&self) -> bool {
        self.console.is_some()
    }

    pub fn has_file_sink(&self) -> bool {
        self.file.lock().is_some()
    }

    /// Path of the owned log file, until it is closed
    pub fn path(&self) -> Option<PathBuf> {
        match &*self.file.lock() {
            Some(FileSink::Owned { path, .. }) => Some(path.clone()),
            _ => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_level(&mut self, level: Severity) {
        self.level = level;
    }
}

impl Logger for LevelLogger {
    fn enabled(&self, level: Severity) -> bool {
        level >= self.level && self.has_file_sink()
    }

    fn write_console(&self, args: fmt::Arguments<'_>) {
        let Some(console) = &self.console else {
            return;
        };
        let line = format!("{args}\n");
        let mut console = console.lock();
        let _ = console.write_all(line.as_bytes());
        let _ = console.flush();
    }

    fn write_record(
        &self,
        level: Severity,
        args: fmt::Arguments<'_>,
        caller: &'static Location<'static>,
    ) {
        if level < self.level {
            return;
        }
        let mut file = self.file.lock();
        let Some(sink) = file.as_mut() else {
            return;
        };
        let mut line = format_line(level, &args.to_string(), caller);
        line.push('\n');
        let _ = sink.write_line(&line);
    }

    fn write_fatal(&self, args: fmt::Arguments<'_>, caller: &'static Location<'static>) {
        let message = args.to_string();
        self.write_record(Severity::Fatal, format_args!("{message}"), caller);
        let _ = self.close();
        let _ = writeln!(io::stderr(), "{message}");
        process::exit(FATAL_EXIT_CODE);
    }

    fn close(&self) -> LogResult<()> {
        let mut guard = self.file.lock();
        match guard.take() {
            Some(FileSink::Owned { path, mut file }) => {
                file.flush()
                    .and_then(|()| sync_file(&file))
                    .map_err(|source| LogError::Close { path, source })
            }
            other => {
                *guard = other;
                Ok(())
            }
        }
    }
}

/// fsync, tolerating handles that cannot be synced (ttys, pipes)
fn sync_file(file: &File) -> io::Result<()> {
    match file.sync_all() {
        Err(e) if e.kind() == io::ErrorKind::InvalidInput => Ok(()),
        result => result,
    }
}

impl fmt::Debug for LevelLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelLogger")
            .field("level", &self.level)
            .field("console", &self.has_console())
            .field("file_sink", &self.has_file_sink())
            .field("path", &self.path())
            .finish()
    }
}

/// Boxed [`LevelLogger::create`], for callers that hold a `dyn Logger`
pub fn new_logger(path: impl AsRef<Path>, level: Severity) -> LogResult<BoxedLogger> {
    Ok(Box::new(LevelLogger::create(path, level)?))
}
