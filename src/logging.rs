//! Log levels and display-threshold handling for worker events.

use log::LevelFilter;
use std::env;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

/// Read the display threshold from the RUST_LOG environment variable.
pub fn get_rust_log_level() -> LogLevel {
    match env::var("RUST_LOG") {
        Ok(value) => parse_rust_log_level(&value),
        Err(_) => LogLevel::Info,
    }
}

/// Derive the display threshold from a RUST_LOG-style directive string.
///
/// Module-qualified directives such as "triptych=debug,hyper=info" resolve
/// to the first directive's level.
pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    let first = rust_log.split(',').next().unwrap_or(rust_log);
    let level = first.rsplit('=').next().unwrap_or(first);

    match level.to_lowercase().as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info,
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

/// True when an event at `event_level` clears the RUST_LOG threshold.
pub fn should_log_with_env(event_level: LogLevel) -> bool {
    should_log(event_level, get_rust_log_level())
}
