//! Console Logger
//!
//! A `log` backend for WASM frontends. Records go to the browser console,
//! routed to the console method that matches their level.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Browser console logger
pub struct ConsoleLogger {
    max_level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(max_level: LevelFilter) -> Self {
        Self { max_level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record.level(), record.target(), &record.args().to_string());
        let value = wasm_bindgen::JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
            Level::Info => web_sys::console::info_1(&value),
            Level::Debug => web_sys::console::log_1(&value),
            Level::Trace => web_sys::console::debug_1(&value),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// `level` is a level name (`"error"`, `"warn"`, `"info"`, `"debug"`,
/// `"trace"`, `"off"`); anything unrecognised falls back to `info`.
pub fn init(level: &str) -> Result<(), SetLoggerError> {
    let max_level = parse_level(level);
    log::set_boxed_logger(Box::new(ConsoleLogger::new(max_level)))?;
    log::set_max_level(max_level);
    Ok(())
}

/// Parse a level name, case-insensitively
pub fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Format a record as `[LEVEL target] message`
pub fn format_record(level: Level, target: &str, message: &str) -> String {
    format!("[{} {}] {}", level, target, message)
}
