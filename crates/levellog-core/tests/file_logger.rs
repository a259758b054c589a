//! End-to-end behaviour through the public, dyn-dispatched API

use std::fs;
use std::sync::Arc;

use levellog_core::{
    log_console_info, log_warning, new_logger, null_logger, LevelLogger, LogError, Logger,
    LoggerExt, MemorySink, Severity, SharedLogger,
};
use regex::Regex;
use tempfile::tempdir;

/// Stand-in for application code that receives its logger by injection
fn run_job(logger: &dyn Logger, items: usize) {
    logger.debug("job starting");
    if items == 0 {
        logger.warning("nothing to do");
    }
    log_console_info!(logger, "processed {items} items");
}

#[test]
fn test_file_logger_through_trait_object() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("job.log");

    let logger = new_logger(&path, Severity::Info).unwrap();
    run_job(logger.as_ref(), 0);
    let line = line!() + 1;
    logger.error("job failed");
    logger.close().unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("WARNING - nothing to do"));
    assert!(lines[1].ends_with("INFO - processed 0 items"));

    let pattern = Regex::new(&format!(
        r"^\d{{4}}-\d{{2}}-\d{{2}} \d{{2}}:\d{{2}}:\d{{2}} - file_logger\.rs:{line} - ERROR - job failed$"
    ))
    .unwrap();
    assert!(pattern.is_match(lines[2]), "unexpected line: {}", lines[2]);
}

#[test]
fn test_caller_is_reported_not_logger() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("caller.log");
    let logger: SharedLogger = Arc::new(LevelLogger::create(&path, Severity::Trace).unwrap());

    let line = line!() + 1;
    log_warning!(logger, "retry {} of {}", 2, 5);
    logger.close().unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(
        contents.contains(&format!(" - file_logger.rs:{line} - WARNING - retry 2 of 5")),
        "unexpected contents: {contents}"
    );
}

#[test]
fn test_reopen_appends() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.log");

    for run in 0..3 {
        let logger = new_logger(&path, Severity::Info).unwrap();
        logger.info(&format!("run {run}"));
        logger.close().unwrap();
    }

    let contents = fs::read_to_string(&path).unwrap();
    let runs: Vec<&str> = contents
        .lines()
        .map(|line| line.rsplit(" - ").next().unwrap())
        .collect();
    assert_eq!(runs, vec!["run 0", "run 1", "run 2"]);
}

#[test]
fn test_console_logger_from_empty_path() {
    let logger = new_logger("", Severity::Fatal).unwrap();
    logger.console("to stdout");
    logger.error("no file sink, dropped");
    assert!(!logger.enabled(Severity::Fatal));
    assert!(logger.close().is_ok());
}

#[test]
fn test_missing_parent_creates_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a").join("b").join("app.log");

    let Err(err) = new_logger(&path, Severity::Info) else {
        panic!("expected PathNotFound for {}", path.display());
    };
    assert!(matches!(err, LogError::PathNotFound(_)));
    assert!(err.to_string().contains("does not exist"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_memory_sinks_for_embedding() {
    let console = MemorySink::new();
    let file = MemorySink::new();
    let logger = LevelLogger::with_sinks(
        Some(Box::new(console.clone())),
        Some(Box::new(file.clone())),
        Severity::Warning,
    );

    logger.console_info("ready");
    logger.warning("slow");

    assert_eq!(console.lines(), vec!["ready"]);
    let lines = file.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("WARNING - slow"));
}

#[test]
fn test_null_logger_swallows_everything() {
    let logger = null_logger();
    run_job(logger.as_ref(), 0);
    logger.fatal("not fatal here");
    assert!(logger.close().is_ok());
    assert!(logger.close().is_ok());
}
