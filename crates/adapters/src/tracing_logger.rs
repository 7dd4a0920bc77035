//! Logger adapter forwarding to `tracing`, plus subscriber installation.

use metrics_client_ports::{LogLevel, LoggerPort, render_log_args};
use metrics_client_shared::{ErrorClass, ErrorCode, ErrorEnvelope};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

/// Logger that emits each record as a `tracing` event under the
/// `metrics_client` target.
#[derive(Debug, Clone, Default)]
pub struct TracingLogger {
    component: Option<String>,
}

impl TracingLogger {
    /// Logger without a component field.
    #[must_use]
    pub const fn new() -> Self {
        Self { component: None }
    }

    /// Tag every event with `component`.
    #[must_use]
    pub fn with_component(component: impl Into<String>) -> Self {
        Self {
            component: Some(component.into()),
        }
    }
}

impl LoggerPort for TracingLogger {
    fn log(&self, level: LogLevel, args: &[Value]) {
        let message = render_log_args(args);
        let component = self.component.as_deref().unwrap_or_default();
        match level {
            LogLevel::Debug => tracing::debug!(target: "metrics_client", component, "{message}"),
            LogLevel::Info => tracing::info!(target: "metrics_client", component, "{message}"),
            LogLevel::Warn => tracing::warn!(target: "metrics_client", component, "{message}"),
            LogLevel::Error => tracing::error!(target: "metrics_client", component, "{message}"),
        }
    }
}

/// Install a global `tracing` subscriber.
///
/// `filter` uses `EnvFilter` directive syntax (for example
/// `"info,metrics_client=debug"`); `json` selects line-delimited JSON output
/// instead of the human-readable format.
pub fn init_tracing(filter: &str, json: bool) -> Result<(), ErrorEnvelope> {
    let env_filter = EnvFilter::try_new(filter).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "invalid_log_filter"),
            format!("invalid log filter: {error}"),
        )
        .with_metadata("filter", filter.to_owned())
    })?;

    let installed = if json {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .json()
            .with_writer(std::io::stderr)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .try_init()
    };

    installed.map_err(|error| {
        ErrorEnvelope::unexpected(
            ErrorCode::new("logging", "subscriber_install_failed"),
            format!("failed to install tracing subscriber: {error}"),
            ErrorClass::NonRetriable,
        )
    })
}
