//! Leveled logging with a console sink, a file sink and a null object

mod error;
mod fs;
mod level;
mod level_logger;
mod line;
mod memory;
mod noop;
mod traits;

pub use error::{LogError, LogResult};
pub use level::Severity;
pub use level_logger::{new_logger, LevelLogger, FATAL_EXIT_CODE};
pub use line::TIMESTAMP_FORMAT;
pub use memory::MemorySink;
pub use noop::{null_logger, NoOpLogger};
pub use traits::{BoxedLogger, Logger, LoggerExt, SharedLogger};
