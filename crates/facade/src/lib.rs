//! # metrics-client-facade
//!
//! Argument validation for metric and reporter constructors.
//!
//! Primitive checks inspect one parameter each; composites run them in a
//! fixed order per constructor and stop at the first failure. Every failure is
//! an [`InvalidArgument`] naming the offending parameter.
//!
//! ```
//! use metrics_client_facade::{CallbackArg, validate_gauge_options};
//! use serde_json::{Value, json};
//!
//! let reading = || json!(42);
//! let result = validate_gauge_options(
//!     Some(&json!("cpu")),
//!     Some(CallbackArg::function(&reading)),
//!     Some(&json!({"host": "a"})),
//!     Some(&json!(10)),
//! );
//! assert!(result.is_ok());
//!
//! let broken = || Value::from("bad");
//! let error = validate_gauge_options(
//!     Some(&json!("cpu")),
//!     Some(CallbackArg::function(&broken)),
//!     None,
//!     None,
//! );
//! assert_eq!(error.err().map(|error| error.parameter().to_owned()), Some("callback()".into()));
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod callback;
mod checks;
mod composite;
mod error;
mod options;
mod validator;

pub use callback::{CallbackArg, GaugeCallback};
pub use checks::{
    check_metric, check_metric_name, check_number_returning_callback, check_optional_dimensions,
    check_optional_logger, check_optional_publishing_interval, check_optional_shared_logger,
    check_reporter_instance, validate_metric, validate_metric_name,
    validate_number_returning_callback, validate_optional_dimensions, validate_optional_logger,
    validate_optional_publishing_interval, validate_reporter_instance,
};
pub use composite::{
    validate_common_metric_parameters, validate_counter_options, validate_gauge_options,
    validate_histogram_options, validate_register_options, validate_reporter_parameters,
    validate_self_reporting_metrics_registry_parameters, validate_settable_gauge_options,
    validate_timer_options,
};
pub use error::InvalidArgument;
pub use options::{
    MetricOptions, ReporterOptions, SelfReportingRegistryOptions, ValidatedMetricOptions,
};
pub use validator::MetricsValidator;

pub use metrics_client_domain::{MetricKind, MetricKindSet};
pub use metrics_client_ports::{Capabilities, SharedCapabilities};

/// Crate version, for diagnostics.
#[must_use]
pub const fn facade_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
