//! Composite checks, one per constructor pathway.
//!
//! Each composite runs its primitives in a fixed order and returns the first
//! failure; later parameters are not inspected.

use crate::callback::CallbackArg;
use crate::checks::{
    validate_metric, validate_metric_name, validate_number_returning_callback,
    validate_optional_dimensions, validate_optional_publishing_interval,
    validate_reporter_instance,
};
use crate::options::{ReporterOptions, SelfReportingRegistryOptions};
use crate::InvalidArgument;
use metrics_client_domain::MetricKindSet;
use metrics_client_ports::Capabilities;
use metrics_client_shared::Validate;
use serde_json::Value;

/// Name, then dimensions, then publishing interval.
pub fn validate_common_metric_parameters(
    name: Option<&Value>,
    dimensions: Option<&Value>,
    publishing_interval: Option<&Value>,
) -> Result<(), InvalidArgument> {
    validate_metric_name(name)?;
    validate_optional_dimensions(dimensions)?;
    validate_optional_publishing_interval(publishing_interval)
}

/// Common parameters, then the callback (invoked once).
pub fn validate_gauge_options(
    name: Option<&Value>,
    callback: Option<CallbackArg<'_>>,
    dimensions: Option<&Value>,
    publishing_interval: Option<&Value>,
) -> Result<(), InvalidArgument> {
    validate_common_metric_parameters(name, dimensions, publishing_interval)?;
    validate_number_returning_callback(callback)
}

/// Histograms take only the common parameters.
pub fn validate_histogram_options(
    name: Option<&Value>,
    dimensions: Option<&Value>,
    publishing_interval: Option<&Value>,
) -> Result<(), InvalidArgument> {
    validate_common_metric_parameters(name, dimensions, publishing_interval)
}

/// Counters take only the common parameters.
pub fn validate_counter_options(
    name: Option<&Value>,
    dimensions: Option<&Value>,
    publishing_interval: Option<&Value>,
) -> Result<(), InvalidArgument> {
    validate_common_metric_parameters(name, dimensions, publishing_interval)
}

/// Timers take only the common parameters.
pub fn validate_timer_options(
    name: Option<&Value>,
    dimensions: Option<&Value>,
    publishing_interval: Option<&Value>,
) -> Result<(), InvalidArgument> {
    validate_common_metric_parameters(name, dimensions, publishing_interval)
}

/// Settable gauges take only the common parameters.
pub fn validate_settable_gauge_options(
    name: Option<&Value>,
    dimensions: Option<&Value>,
    publishing_interval: Option<&Value>,
) -> Result<(), InvalidArgument> {
    validate_common_metric_parameters(name, dimensions, publishing_interval)
}

/// Metric first, then the common parameters.
pub fn validate_register_options(
    name: Option<&Value>,
    metric: Option<&dyn Capabilities>,
    dimensions: Option<&Value>,
    publishing_interval: Option<&Value>,
    kinds: &MetricKindSet,
) -> Result<(), InvalidArgument> {
    validate_metric(metric, kinds)?;
    validate_common_metric_parameters(name, dimensions, publishing_interval)
}

/// Default dimensions, then logger. Absent options are accepted.
pub fn validate_reporter_parameters(
    options: Option<&ReporterOptions>,
) -> Result<(), InvalidArgument> {
    options.map_or(Ok(()), Validate::validate)
}

/// Reporter instance, then (when options are present) the logger.
pub fn validate_self_reporting_metrics_registry_parameters(
    reporter: Option<&dyn Capabilities>,
    options: Option<&SelfReportingRegistryOptions>,
) -> Result<(), InvalidArgument> {
    validate_reporter_instance(reporter)?;
    options.map_or(Ok(()), Validate::validate)
}
