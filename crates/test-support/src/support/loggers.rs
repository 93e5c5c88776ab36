//! Logger implementations for asserting on diagnostics.

use flagrt::{LogLevel, Logger};
use parking_lot::Mutex;

/// Keeps every line it is given.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    lines: Mutex<Vec<(LogLevel, String)>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(LogLevel, String)> {
        self.lines.lock().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.lines
            .lock()
            .iter()
            .filter(|(level, _)| *level == LogLevel::Error)
            .map(|(_, line)| line.clone())
            .collect()
    }

    fn push(&self, level: LogLevel, message: &str) {
        self.lines.lock().push((level, message.to_string()));
    }
}

impl Logger for RecordingLogger {
    fn debug(&self, message: &str) {
        self.push(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }
}

/// Panics on every call.
#[derive(Debug, Default)]
pub struct PanickingLogger;

impl Logger for PanickingLogger {
    fn debug(&self, message: &str) {
        panic!("debug rejected: {message}");
    }

    fn info(&self, message: &str) {
        panic!("info rejected: {message}");
    }

    fn warn(&self, message: &str) {
        panic!("warn rejected: {message}");
    }

    fn error(&self, message: &str) {
        panic!("error rejected: {message}");
    }
}
