//! Structured JSON logger adapter.

use crate::log_sink::LogSink;
use metrics_client_ports::{LogLevel, LoggerPort, render_log_args};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Fields attached to every record a logger emits.
pub type LogFields = BTreeMap<String, Value>;

/// JSON logger emitting one line per record.
///
/// The line carries `timestampMs`, `level`, a rendered `message`, the raw
/// `args` when any of them is not a string, and the base `fields`.
#[derive(Clone)]
pub struct JsonLogger {
    sink: Arc<dyn LogSink>,
    base_fields: LogFields,
    min_level: LogLevel,
}

impl JsonLogger {
    /// Create a JSON logger backed by the provided sink.
    #[must_use]
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self {
            sink,
            base_fields: LogFields::new(),
            min_level: LogLevel::Info,
        }
    }

    /// Set base fields applied to every record.
    #[must_use]
    pub fn with_base_fields(mut self, fields: LogFields) -> Self {
        self.base_fields = fields;
        self
    }

    /// Add one base field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.base_fields.insert(key.into(), value.into());
        self
    }

    /// Set the minimum log level.
    #[must_use]
    pub const fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Copy of this logger with `fields` merged over the base fields.
    #[must_use]
    pub fn child(&self, fields: LogFields) -> Self {
        let mut merged = self.base_fields.clone();
        merged.extend(fields);
        Self {
            sink: Arc::clone(&self.sink),
            base_fields: merged,
            min_level: self.min_level,
        }
    }

    fn encode(&self, level: LogLevel, args: &[Value]) -> String {
        let mut payload = Map::new();
        payload.insert("timestampMs".to_owned(), Value::from(now_epoch_ms()));
        payload.insert("level".to_owned(), Value::from(level.as_str()));
        payload.insert("message".to_owned(), Value::from(render_log_args(args)));
        if args.iter().any(|arg| !arg.is_string()) {
            payload.insert("args".to_owned(), Value::Array(args.to_vec()));
        }
        if !self.base_fields.is_empty() {
            let fields: Map<String, Value> = self
                .base_fields
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            payload.insert("fields".to_owned(), Value::Object(fields));
        }

        serde_json::to_string(&Value::Object(payload)).map_or_else(
            |_| {
                "{\"timestampMs\":0,\"level\":\"error\",\"message\":\"log serialization failed\"}\n"
                    .to_owned()
            },
            |mut encoded| {
                encoded.push('\n');
                encoded
            },
        )
    }
}

impl LoggerPort for JsonLogger {
    fn log(&self, level: LogLevel, args: &[Value]) {
        if level < self.min_level {
            return;
        }
        self.sink.write_line(&self.encode(level, args));
    }
}

impl std::fmt::Debug for JsonLogger {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("JsonLogger")
            .field("base_fields", &self.base_fields)
            .field("min_level", &self.min_level)
            .finish_non_exhaustive()
    }
}

fn now_epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .ok()
        .and_then(|duration| u64::try_from(duration.as_millis()).ok())
        .unwrap_or_default()
}
