//! Log line layout
//!
//! `<YYYY-MM-DD HH:MM:SS> - <file>:<line> - <LEVEL> - <message>`

use std::fmt;
use std::panic::Location;
use std::path::Path;

use chrono::Local;

use super::level::Severity;

/// chrono format for the leading timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a file line stamped with the current local time, without the trailing newline
pub(crate) fn format_line(level: Severity, message: &str, caller: &Location<'_>) -> String {
    render(
        Local::now().format(TIMESTAMP_FORMAT),
        base_name(caller.file()),
        caller.line(),
        level,
        message,
    )
}

fn render(
    timestamp: impl fmt::Display,
    file: &str,
    line: u32,
    level: Severity,
    message: &str,
) -> String {
    format!("{timestamp} - {file}:{line} - {level} - {message}")
}

/// Strip directories from a source path
fn base_name(file: &str) -> &str {
    Path::new(file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file)
}
