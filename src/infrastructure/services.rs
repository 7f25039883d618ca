use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider, get_time_provider};
use wasm_bindgen::JsValue;

/// Logger writing to the browser console, with a minimum-level filter
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }

        let formatted = format!(
            "[{}] {} {}: {}",
            get_time_provider().format_timestamp(entry.timestamp),
            entry.level,
            entry.component,
            entry.message
        );
        let js_message = JsValue::from(&formatted);

        match entry.level {
            LogLevel::Debug => web_sys::console::debug_1(&js_message),
            LogLevel::Info => web_sys::console::log_1(&js_message),
            LogLevel::Warn => web_sys::console::warn_1(&js_message),
            LogLevel::Error => web_sys::console::error_1(&js_message),
        }
    }
}

/// Time provider backed by the browser clock
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        let date = js_sys::Date::new(&JsValue::from_f64(timestamp as f64));
        format!(
            "{:02}:{:02}:{:02}",
            date.get_hours(),
            date.get_minutes(),
            date.get_seconds()
        )
    }
}
