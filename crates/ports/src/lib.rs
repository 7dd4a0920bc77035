//! # metrics-client-ports
//!
//! Contracts between metric constructors and their collaborators:
//!
//! - [`Metric`], [`Reporter`], [`MetricsRegistry`], [`LoggerPort`] - typed traits
//! - [`Capabilities`] - runtime view of exported methods, used where objects
//!   cross a dynamic boundary (plugin-supplied reporters, script metrics)
//! - [`PluginObject`] - a method table loaded at runtime
//!
//! Depends only on `domain` and `shared`.

pub mod capabilities;
pub mod logger;
pub mod metric;
pub mod plugin;
pub mod reporter;

pub use capabilities::{Capabilities, SharedCapabilities};
pub use logger::{LOGGER_METHODS, LogLevel, LoggerObject, LoggerPort, render_log_args};
pub use metric::{METRIC_GET_TYPE, METRIC_TO_JSON, Metric, MetricObject};
pub use plugin::{PluginMethod, PluginObject};
pub use reporter::{
    MetricsRegistry, REPORTER_REPORT_METRIC_ON_INTERVAL, REPORTER_SET_REGISTRY, Reporter,
    ReporterObject,
};

// Re-export domain types used in port signatures, so adapter crates can
// implement ports without directly depending on `metrics-client-domain`.
pub use metrics_client_domain::{Dimensions, MetricKind, PublishingInterval};

/// Returns the ports crate version.
#[must_use]
pub const fn ports_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
