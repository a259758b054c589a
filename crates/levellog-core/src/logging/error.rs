//! Logger error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by logger construction, `close` and config loading
///
/// Leveled writes never return these; write failures on a sink are dropped.
#[derive(Error, Debug)]
pub enum LogError {
    /// The directory that should hold the log file is missing
    #[error("Log path does not exist {}", .0.display())]
    PathNotFound(PathBuf),

    /// The directory that should hold the log file failed the write probe
    #[error("Log path {} is not writable", .0.display())]
    PathNotWritable(PathBuf),

    #[error("Error opening file {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error creating file {}: {source}", .path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error closing file {}: {source}", .path.display())]
    Close {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error reading config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse logger config: {0}")]
    ConfigParse(String),

    #[error("Invalid log level: {0}")]
    InvalidLevel(String),
}

pub type LogResult<T> = Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_messages_carry_path() {
        let err = LogError::PathNotFound(PathBuf::from("/missing/dir"));
        assert_eq!(err.to_string(), "Log path does not exist /missing/dir");

        let err = LogError::PathNotWritable(PathBuf::from("/ro"));
        assert_eq!(err.to_string(), "Log path /ro is not writable");
    }

    #[test]
    fn test_io_errors_keep_their_source() {
        let err = LogError::FileCreate {
            path: PathBuf::from("/tmp/app.log"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().starts_with("Error creating file /tmp/app.log"));
        assert_eq!(err.source().unwrap().to_string(), "denied");
    }
}
