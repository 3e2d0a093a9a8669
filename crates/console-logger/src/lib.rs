//! Console Logger
//!
//! A `log` backend for WASM frontends that writes every record to the
//! browser devtools console, routing each level to the matching console method.

use log::{Level, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

/// Logger writing to `window.console`
pub struct ConsoleLogger {
    level: Level,
}

impl ConsoleLogger {
    pub fn new(level: Level) -> Self {
        Self { level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_line(record.level(), record.target(), &record.args().to_string()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Format a single console line: `LEVEL target: message`
pub fn format_line(level: Level, target: &str, message: &str) -> String {
    format!("{:<5} {}: {}", level, target, message)
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was already installed.
pub fn init(level: Level) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(level)))?;
    log::set_max_level(level.to_level_filter());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::MetadataBuilder;

    #[test]
    fn test_format_line_pads_level() {
        assert_eq!(format_line(Level::Info, "todos_ui::api", "[API] GET /todos"), "INFO  todos_ui::api: [API] GET /todos");
        assert_eq!(format_line(Level::Error, "app", "boom"), "ERROR app: boom");
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = ConsoleLogger::new(Level::Info);
        let info = MetadataBuilder::new().level(Level::Info).build();
        let warn = MetadataBuilder::new().level(Level::Warn).build();
        let debug = MetadataBuilder::new().level(Level::Debug).build();

        assert!(logger.enabled(&info));
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&debug));
    }
}
