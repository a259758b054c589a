//! Logger configuration
//!
//! - `LoggerConfig`: YAML file (~/.config/levellog/config.yaml) plus `LEVELLOG_*` overrides

mod file;

pub use file::{LoggerConfig, ENV_ENABLED, ENV_FILE, ENV_LEVEL};
