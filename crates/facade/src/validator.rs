//! Validator carrying the injected metric-kind set and name policy.

use crate::callback::CallbackArg;
use crate::checks::{
    validate_metric, validate_metric_name, validate_number_returning_callback,
    validate_optional_dimensions, validate_optional_publishing_interval,
};
use crate::composite;
use crate::options::{
    MetricOptions, ReporterOptions, SelfReportingRegistryOptions, ValidatedMetricOptions,
};
use crate::InvalidArgument;
use metrics_client_config::ValidationConfig;
use metrics_client_domain::MetricKindSet;
use metrics_client_ports::Capabilities;
use metrics_client_shared::ValidationError;
use serde_json::Value;

/// Entry point used by metric and reporter constructors.
///
/// Stateless apart from its configuration; cloning is cheap enough to hand a
/// copy to every registry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MetricsValidator {
    kinds: MetricKindSet,
    reject_empty_names: bool,
}

impl MetricsValidator {
    /// Validator accepting `kinds`, with the permissive name policy.
    #[must_use]
    pub const fn new(kinds: MetricKindSet) -> Self {
        Self {
            kinds,
            reject_empty_names: false,
        }
    }

    /// Validator built from loaded configuration.
    #[must_use]
    pub fn from_config(config: &ValidationConfig) -> Self {
        Self {
            kinds: config.metric_kind_set(),
            reject_empty_names: config.reject_empty_names,
        }
    }

    /// Reject empty metric names in addition to non-string ones.
    #[must_use]
    pub const fn with_reject_empty_names(mut self, reject: bool) -> Self {
        self.reject_empty_names = reject;
        self
    }

    /// Accepted metric kinds.
    #[must_use]
    pub const fn kinds(&self) -> &MetricKindSet {
        &self.kinds
    }

    /// Name check honoring the empty-name policy.
    pub fn validate_metric_name(&self, name: Option<&Value>) -> Result<(), InvalidArgument> {
        validate_metric_name(name)?;
        if self.reject_empty_names && name.and_then(Value::as_str).is_some_and(str::is_empty) {
            return Err(InvalidArgument::invalid("name", "must not be empty".to_owned()));
        }
        Ok(())
    }

    /// Metric check against the configured kinds.
    pub fn validate_metric(&self, metric: Option<&dyn Capabilities>) -> Result<(), InvalidArgument> {
        validate_metric(metric, &self.kinds)
    }

    /// Name, then dimensions, then publishing interval.
    pub fn validate_common_metric_parameters(
        &self,
        name: Option<&Value>,
        dimensions: Option<&Value>,
        publishing_interval: Option<&Value>,
    ) -> Result<(), InvalidArgument> {
        self.validate_metric_name(name)?;
        validate_optional_dimensions(dimensions)?;
        validate_optional_publishing_interval(publishing_interval)
    }

    /// Common parameters, then the callback.
    pub fn validate_gauge_options(
        &self,
        name: Option<&Value>,
        callback: Option<CallbackArg<'_>>,
        dimensions: Option<&Value>,
        publishing_interval: Option<&Value>,
    ) -> Result<(), InvalidArgument> {
        self.validate_common_metric_parameters(name, dimensions, publishing_interval)?;
        validate_number_returning_callback(callback)
    }

    /// Shared entry point for histograms, counters, timers and settable gauges.
    pub fn validate_metric_options(
        &self,
        name: Option<&Value>,
        dimensions: Option<&Value>,
        publishing_interval: Option<&Value>,
    ) -> Result<(), InvalidArgument> {
        self.validate_common_metric_parameters(name, dimensions, publishing_interval)
    }

    /// Histogram constructor parameters.
    pub fn validate_histogram_options(
        &self,
        name: Option<&Value>,
        dimensions: Option<&Value>,
        publishing_interval: Option<&Value>,
    ) -> Result<(), InvalidArgument> {
        self.validate_metric_options(name, dimensions, publishing_interval)
    }

    /// Counter constructor parameters.
    pub fn validate_counter_options(
        &self,
        name: Option<&Value>,
        dimensions: Option<&Value>,
        publishing_interval: Option<&Value>,
    ) -> Result<(), InvalidArgument> {
        self.validate_metric_options(name, dimensions, publishing_interval)
    }

    /// Timer constructor parameters.
    pub fn validate_timer_options(
        &self,
        name: Option<&Value>,
        dimensions: Option<&Value>,
        publishing_interval: Option<&Value>,
    ) -> Result<(), InvalidArgument> {
        self.validate_metric_options(name, dimensions, publishing_interval)
    }

    /// Settable gauge constructor parameters.
    pub fn validate_settable_gauge_options(
        &self,
        name: Option<&Value>,
        dimensions: Option<&Value>,
        publishing_interval: Option<&Value>,
    ) -> Result<(), InvalidArgument> {
        self.validate_metric_options(name, dimensions, publishing_interval)
    }

    /// Metric first, then the common parameters.
    pub fn validate_register_options(
        &self,
        name: Option<&Value>,
        metric: Option<&dyn Capabilities>,
        dimensions: Option<&Value>,
        publishing_interval: Option<&Value>,
    ) -> Result<(), InvalidArgument> {
        self.validate_metric(metric)?;
        self.validate_common_metric_parameters(name, dimensions, publishing_interval)
    }

    /// Reporter options (default dimensions, then logger).
    #[allow(clippy::unused_self, reason = "kept as a method so callers hold one validator")]
    pub fn validate_reporter_parameters(
        &self,
        options: Option<&ReporterOptions>,
    ) -> Result<(), InvalidArgument> {
        composite::validate_reporter_parameters(options)
    }

    /// Reporter instance, then the registry options' logger.
    #[allow(clippy::unused_self, reason = "kept as a method so callers hold one validator")]
    pub fn validate_self_reporting_metrics_registry_parameters(
        &self,
        reporter: Option<&dyn Capabilities>,
        options: Option<&SelfReportingRegistryOptions>,
    ) -> Result<(), InvalidArgument> {
        composite::validate_self_reporting_metrics_registry_parameters(reporter, options)
    }

    /// Validate decoded metric options and convert them to typed values.
    pub fn validate_metric_options_dto(
        &self,
        options: MetricOptions,
    ) -> Result<ValidatedMetricOptions, InvalidArgument> {
        self.validate_metric_name(options.name.as_ref())?;
        options.into_validated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_client_domain::MetricKind;
    use metrics_client_ports::PluginObject;
    use serde_json::json;

    #[test]
    fn default_validator_accepts_standard_kinds_and_empty_names() {
        let validator = MetricsValidator::default();
        assert_eq!(validator.kinds(), &MetricKindSet::standard());
        assert!(validator.validate_metric_name(Some(&json!(""))).is_ok());
    }

    #[test]
    fn strict_names_reject_empty_strings_at_the_name_step() {
        let validator = MetricsValidator::default().with_reject_empty_names(true);
        let error = validator
            .validate_common_metric_parameters(Some(&json!("")), Some(&json!([])), None)
            .err();
        assert_eq!(
            error.map(|error| error.to_string()),
            Some("name must not be empty".to_string())
        );
        assert!(validator.validate_metric_name(Some(&json!("cpu"))).is_ok());
    }

    #[test]
    fn register_uses_injected_kinds() {
        let validator = MetricsValidator::new(MetricKindSet::from_kinds([MetricKind::Counter]));
        let gauge = PluginObject::new()
            .with_method("toJSON", |_| json!(1))
            .with_method("getType", |_| json!("Gauge"));

        let error = validator
            .validate_register_options(Some(&json!("cpu")), Some(&gauge), None, None)
            .err();
        assert_eq!(error.as_ref().map(InvalidArgument::parameter), Some("metric"));
    }

    #[test]
    fn metric_options_dto_respects_name_policy() {
        let validator = MetricsValidator::default().with_reject_empty_names(true);
        let options = MetricOptions {
            name: Some(json!("")),
            ..MetricOptions::default()
        };
        assert!(validator.validate_metric_options_dto(options).is_err());
    }

    #[test]
    fn from_config_copies_policy() {
        let config = ValidationConfig {
            metric_kinds: vec!["Gauge".to_string(), "Summary".to_string()],
            reject_empty_names: true,
        };
        let validator = MetricsValidator::from_config(&config);
        assert!(validator.kinds().contains("Summary"));
        assert!(!validator.kinds().contains("Counter"));
        assert!(validator.validate_metric_name(Some(&json!(""))).is_err());
    }
}
