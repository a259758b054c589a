//! Filesystem checks and open modes for log files

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

/// Directory a log file lives in; a bare filename resolves to `.`
pub(crate) fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

/// Only a definite "not found" counts as missing
pub(crate) fn path_exists(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(_) => true,
        Err(e) => e.kind() != io::ErrorKind::NotFound,
    }
}

/// Probe write access with `access(2)`
#[cfg(unix)]
pub(crate) fn path_writable(path: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: c_path is a valid NUL-terminated string that outlives the call.
    unsafe { libc::access(c_path.as_ptr(), libc::W_OK) == 0 }
}

/// No probe available; assume writable
#[cfg(not(unix))]
pub(crate) fn path_writable(_path: &Path) -> bool {
    true
}

/// Open an existing log file write-only for appending
pub(crate) fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().append(true).open(path)
}

/// Create a new log file readable and writable by the owner only
pub(crate) fn create_log_file(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.append(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options.open(path)
}
