//! Rolling Logger
//!
//! `log::Log` implementation for the browser. Every record is written to the
//! developer console (stderr when not on wasm32) and kept in a bounded
//! in-memory buffer so the UI can show what happened recently.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines kept in the rolling buffer
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Logger with a fixed-size circular buffer of formatted lines
pub struct RollingLogger {
    app_name: String,
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(app_name: impl Into<String>, level: LevelFilter, capacity: usize) -> Self {
        Self {
            app_name: app_name.into(),
            level,
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Format a record the way it appears in the console and the buffer
    fn format(&self, record: &Record) -> String {
        format!(
            "[{}] {} {} [{}] {}",
            chrono::Utc::now().format("%H:%M:%S%.3f"),
            self.app_name,
            record.level(),
            record.target(),
            record.args()
        )
    }

    fn push(&self, line: String) {
        let Ok(mut lines) = self.lines.lock() else {
            return;
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Most recent lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format(record);
        write_console(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger. Fails if a logger was already set.
pub fn init_logger(app_name: &str, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(app_name, level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Install the global logger, writing any failure straight to the console
///
/// Returns whether this call installed the logger.
pub fn init_or_warn(app_name: &str, level: LevelFilter) -> bool {
    match init_logger(app_name, level) {
        Ok(()) => true,
        Err(err) => {
            write_console(Level::Warn, &format!("{}: logger not installed: {}", app_name, err));
            false
        }
    }
}

/// Recent lines from the global logger (empty before `init_logger`)
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(RollingLogger::recent).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_line(logger: &RollingLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", msg))
                .level(level)
                .target("test")
                .build(),
        );
    }

    #[test]
    fn test_buffer_rolls_over() {
        let logger = RollingLogger::new("Test", LevelFilter::Debug, 2);
        record_line(&logger, Level::Info, "one");
        record_line(&logger, Level::Info, "two");
        record_line(&logger, Level::Info, "three");

        let lines = logger.recent();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("two"));
        assert!(lines[1].ends_with("three"));
    }

    #[test]
    fn test_records_above_level_are_dropped() {
        let logger = RollingLogger::new("Test", LevelFilter::Warn, 10);
        record_line(&logger, Level::Debug, "noise");
        record_line(&logger, Level::Error, "boom");

        let lines = logger.recent();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR"));
        assert!(lines[0].contains("[test] boom"));
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let logger = RollingLogger::new("Test", LevelFilter::Trace, 0);
        record_line(&logger, Level::Info, "a");
        record_line(&logger, Level::Info, "b");
        assert_eq!(logger.recent().len(), 1);
    }

    #[test]
    fn test_second_init_is_reported_not_installed() {
        let first = init_or_warn("Test", LevelFilter::Info);
        assert!(!init_or_warn("Test", LevelFilter::Info));
        assert!(init_logger("Test", LevelFilter::Info).is_err());
        if first {
            log::info!("after init");
            assert!(recent_lines().iter().any(|line| line.ends_with("after init")));
        }
    }
}
