//! Logging module for the overlay engine.

use chrono::Local;
use std::fs::OpenOptions;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use super::setting::SETTINGS;
use super::utility::get_folder_path;

/// Log level constants
pub const DEBUG: i32 = 10;
pub const INFO: i32 = 20;
pub const WARNING: i32 = 30;
pub const ERROR: i32 = 40;
pub const CRITICAL: i32 = 50;

/// Convert integer log level to tracing Level
pub fn level_from_int(level: i32) -> Level {
    match level {
        0..=10 => Level::DEBUG,
        11..=20 => Level::INFO,
        21..=30 => Level::WARN,
        _ => Level::ERROR,
    }
}

/// Initialize the logger.
///
/// Reads `log.active`, `log.level`, `log.console` and `log.file` from the
/// global settings. Console and file output are independent layers; the
/// log folder is created on demand by the path helper.
pub fn init_logger() {
    if !SETTINGS.get_bool("log.active").unwrap_or(true) {
        return;
    }

    let log_level = SETTINGS.get_int("log.level").unwrap_or(INFO as i64) as i32;
    let log_console = SETTINGS.get_bool("log.console").unwrap_or(true);
    let log_file = SETTINGS.get_bool("log.file").unwrap_or(true);

    let filter = EnvFilter::from_default_env().add_directive(level_from_int(log_level).into());

    let console_layer = log_console.then(|| fmt::layer().with_target(true).with_ansi(true));

    let file_layer = log_file.then(|| {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(get_log_file_path())
            .expect("Failed to open log file");
        fmt::layer()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Get the log file path for today
fn get_log_file_path() -> PathBuf {
    let today = Local::now().format("%Y%m%d");
    get_folder_path("log").join(format!("overlay_{}.log", today))
}

/// Simple logger for writing log messages
pub struct Logger {
    pub name: String,
}

impl Logger {
    /// Create a new logger with a name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Log a debug message
    pub fn debug(&self, msg: &str) {
        tracing::debug!(logger = %self.name, "{}", msg);
    }

    /// Log an info message
    pub fn info(&self, msg: &str) {
        tracing::info!(logger = %self.name, "{}", msg);
    }

    /// Log a warning message
    pub fn warn(&self, msg: &str) {
        tracing::warn!(logger = %self.name, "{}", msg);
    }

    /// Log an error message
    pub fn error(&self, msg: &str) {
        tracing::error!(logger = %self.name, "{}", msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_int() {
        assert_eq!(level_from_int(DEBUG), Level::DEBUG);
        assert_eq!(level_from_int(INFO), Level::INFO);
        assert_eq!(level_from_int(WARNING), Level::WARN);
        assert_eq!(level_from_int(ERROR), Level::ERROR);
        assert_eq!(level_from_int(CRITICAL), Level::ERROR);
    }

    #[test]
    fn test_logger_new() {
        let logger = Logger::new("TestLogger");
        assert_eq!(logger.name, "TestLogger");
    }
}
