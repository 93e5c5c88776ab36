//! Logger contract and the defensive adapter every installed logger is wrapped in.
//!
//! [`DefaultLogger`] forwards to `tracing` under the `flagrt` target.
//! [`SafeLogger`] wraps a caller-supplied logger so that a panic inside it is
//! absorbed and reported to the default logger instead of unwinding into the
//! registry.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        };
        f.write_str(level)
    }
}

/// Sink for diagnostics emitted by the registry and client handles.
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str);

    fn info(&self, message: &str);

    fn warn(&self, message: &str);

    fn error(&self, message: &str);

    /// Dispatch on a runtime level.
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => self.debug(message),
            LogLevel::Info => self.info(message),
            LogLevel::Warn => self.warn(message),
            LogLevel::Error => self.error(message),
        }
    }
}

/// Logger backed by `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLogger;

impl DefaultLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for DefaultLogger {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "flagrt", "{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!(target: "flagrt", "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "flagrt", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "flagrt", "{}", message);
    }
}

/// Adapter that never lets the wrapped logger unwind into the caller.
pub struct SafeLogger {
    inner: Arc<dyn Logger>,
    fallback: DefaultLogger,
}

impl SafeLogger {
    pub fn new(inner: Arc<dyn Logger>) -> Self {
        Self {
            inner,
            fallback: DefaultLogger::new(),
        }
    }

    fn guarded(&self, level: LogLevel, message: &str) {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.inner.log(level, message)));
        if let Err(payload) = outcome {
            tracing::error!(
                target: "flagrt",
                level = %level,
                reason = %panic_message(payload.as_ref()),
                "Error calling supplied logger"
            );
            self.fallback.log(level, message);
        }
    }
}

impl fmt::Debug for SafeLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SafeLogger").finish_non_exhaustive()
    }
}

impl Logger for SafeLogger {
    fn debug(&self, message: &str) {
        self.guarded(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.guarded(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.guarded(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.guarded(LogLevel::Error, message);
    }
}

/// Best-effort text of a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
