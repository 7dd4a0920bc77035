//! Logging contract handed to reporters and self-reporting registries.

use crate::Capabilities;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Exported names every logger must provide.
pub const LOGGER_METHODS: [&str; 4] = ["debug", "info", "warn", "error"];

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Debug.
    Debug,
    /// Info.
    Info,
    /// Warn.
    Warn,
    /// Error.
    Error,
}

impl LogLevel {
    /// Exported method name for this level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Parse an exported method name.
    #[must_use]
    pub fn from_method(method: &str) -> Option<Self> {
        match method {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Boundary contract for logging. Each level takes any number of arguments.
pub trait LoggerPort: Send + Sync {
    /// Emit one log record.
    fn log(&self, level: LogLevel, args: &[Value]);

    /// Convenience: debug record.
    fn debug(&self, args: &[Value]) {
        self.log(LogLevel::Debug, args);
    }

    /// Convenience: info record.
    fn info(&self, args: &[Value]) {
        self.log(LogLevel::Info, args);
    }

    /// Convenience: warn record.
    fn warn(&self, args: &[Value]) {
        self.log(LogLevel::Warn, args);
    }

    /// Convenience: error record.
    fn error(&self, args: &[Value]) {
        self.log(LogLevel::Error, args);
    }
}

/// Render variadic log arguments as one line.
///
/// Strings are written as-is, anything else as compact JSON, separated by a
/// single space.
#[must_use]
pub fn render_log_args(args: &[Value]) -> String {
    let mut line = String::new();
    for (index, arg) in args.iter().enumerate() {
        if index > 0 {
            line.push(' ');
        }
        match arg {
            Value::String(text) => line.push_str(text),
            other => line.push_str(&other.to_string()),
        }
    }
    line
}

/// Capability view over a typed [`LoggerPort`].
#[derive(Clone)]
pub struct LoggerObject(pub Arc<dyn LoggerPort>);

impl LoggerObject {
    /// Wrap a typed logger.
    pub fn new(logger: impl LoggerPort + 'static) -> Self {
        Self(Arc::new(logger))
    }
}

impl Capabilities for LoggerObject {
    fn has_method(&self, method: &str) -> bool {
        LogLevel::from_method(method).is_some()
    }

    fn invoke(&self, method: &str, args: &[Value]) -> Option<Value> {
        let level = LogLevel::from_method(method)?;
        self.0.log(level, args);
        Some(Value::Null)
    }
}
