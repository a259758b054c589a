//! File-based logger configuration (YAML)
//!
//! ```yaml
//! file: /var/log/app.log   # absent or empty for console-only
//! level: warning
//! enabled: true            # false hands out a NoOpLogger
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::logging::{null_logger, BoxedLogger, LevelLogger, LogError, LogResult, Severity};

/// Overrides `file`; an empty value selects console-only output
pub const ENV_FILE: &str = "LEVELLOG_FILE";
/// Overrides `level`; unparseable values are ignored
pub const ENV_LEVEL: &str = "LEVELLOG_LEVEL";
/// Overrides `enabled` with `1`/`true` or `0`/`false`
pub const ENV_ENABLED: &str = "LEVELLOG_ENABLED";

/// Settings needed to build a logger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Log file path; `None` logs to the console
    pub file: Option<PathBuf>,
    /// Minimum severity written to the file
    pub level: Severity,
    /// When false, `build` returns a null logger
    pub enabled: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: Severity::default(),
            enabled: true,
        }
    }
}

impl LoggerConfig {
    /// Config for a file logger
    pub fn new(file: impl Into<PathBuf>, level: Severity) -> Self {
        Self {
            file: Some(file.into()),
            level,
            enabled: true,
        }
    }

    /// Config for a console-only logger
    pub fn console(level: Severity) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    /// Config that builds a null logger
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Parse a YAML document; an empty document gives the defaults
    pub fn from_yaml_str(yaml: &str) -> LogResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| LogError::ConfigParse(e.to_string()))
    }

    /// Load from a YAML file; a missing file gives the defaults
    pub fn load(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| LogError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// User-level config location (~/.config/levellog/config.yaml)
    pub fn user_config_path() -> PathBuf {
        // XDG config directory (~/.config on Linux, ~/Library/Application Support on macOS)
        let config_dir = dirs::config_dir().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
        });
        config_dir.join("levellog").join("config.yaml")
    }

    /// Serialize back to YAML
    pub fn to_yaml(&self) -> LogResult<String> {
        serde_yaml::to_string(self).map_err(|e| LogError::ConfigParse(e.to_string()))
    }

    /// Apply `LEVELLOG_FILE`, `LEVELLOG_LEVEL` and `LEVELLOG_ENABLED`
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(file) = lookup(ENV_FILE) {
            self.file = if file.is_empty() {
                None
            } else {
                Some(PathBuf::from(file))
            };
        }

        if let Some(level) = lookup(ENV_LEVEL).and_then(|v| v.parse().ok()) {
            self.level = level;
        }

        if let Some(enabled) = lookup(ENV_ENABLED) {
            match enabled.trim().to_lowercase().as_str() {
                "1" | "true" => self.enabled = true,
                "0" | "false" => self.enabled = false,
                _ => {}
            }
        }

        self
    }

    /// Build the configured logger
    pub fn build(&self) -> LogResult<BoxedLogger> {
        if !self.enabled {
            return Ok(null_logger());
        }
        let path = self.file.as_deref().unwrap_or_else(|| Path::new(""));
        Ok(Box::new(LevelLogger::create(path, self.level)?))
    }
}
