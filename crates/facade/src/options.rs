//! Option DTOs validated with `#[derive(Validate)]`.

use crate::InvalidArgument;
use metrics_client_domain::{Dimensions, PublishingInterval, value_kind};
use metrics_client_ports::{Capabilities, LOGGER_METHODS, SharedCapabilities};
use metrics_client_shared::Validate;
use metrics_client_validate_derive::Validate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Options accepted by reporter constructors.
///
/// Decoded from configuration with camelCase keys; the logger is attached in
/// code since it cannot be expressed as data. A `logger` entry given as data
/// exports no methods, so decoding rejects it.
#[derive(Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "InvalidArgument")]
pub struct ReporterOptions {
    /// Dimensions added to every metric the reporter publishes.
    #[serde(default, deserialize_with = "present")]
    #[validate(
        field = "defaultDimensions",
        custom = "crate::checks::check_optional_dimensions"
    )]
    pub default_dimensions: Option<Value>,
    /// Logger used by the reporter.
    #[serde(skip)]
    #[validate(custom = "crate::checks::check_optional_shared_logger")]
    pub logger: Option<SharedCapabilities>,
}

impl ReporterOptions {
    /// Decode options from a dynamic value, ignoring unknown keys.
    ///
    /// Default dimensions are checked before a non-null `logger` entry is
    /// rejected, matching the order of [`Validate::validate`].
    pub fn from_value(value: &Value) -> Result<Self, InvalidArgument> {
        let options: Self = decode("options", value)?;
        match value.get("logger") {
            Some(logger) if !logger.is_null() => {
                options.validate()?;
                Err(InvalidArgument::missing_methods(
                    "logger",
                    &LOGGER_METHODS,
                    &LOGGER_METHODS,
                ))
            },
            _ => Ok(options),
        }
    }

    /// Set default dimensions.
    #[must_use]
    pub fn with_default_dimensions(mut self, dimensions: Value) -> Self {
        self.default_dimensions = Some(dimensions);
        self
    }

    /// Attach a logger.
    #[must_use]
    pub fn with_logger(mut self, logger: SharedCapabilities) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Validate and return the default dimensions as a typed value.
    pub fn default_dimensions(&self) -> Result<Dimensions, InvalidArgument> {
        self.validate()?;
        Ok(self
            .default_dimensions
            .as_ref()
            .and_then(|value| Dimensions::from_value(value).ok())
            .unwrap_or_default())
    }
}

impl fmt::Debug for ReporterOptions {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ReporterOptions")
            .field("default_dimensions", &self.default_dimensions)
            .field("logger", &self.logger.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Options accepted by self-reporting registry constructors.
#[derive(Clone, Default, Validate)]
#[validate(error = "InvalidArgument")]
pub struct SelfReportingRegistryOptions {
    /// Logger used by the registry.
    #[validate(custom = "crate::checks::check_optional_shared_logger")]
    pub logger: Option<SharedCapabilities>,
}

impl SelfReportingRegistryOptions {
    /// Options carrying only a logger.
    #[must_use]
    pub fn with_logger(logger: SharedCapabilities) -> Self {
        Self {
            logger: Some(logger),
        }
    }

    /// The configured logger, if any.
    #[must_use]
    pub fn logger(&self) -> Option<&dyn Capabilities> {
        self.logger.as_deref().map(without_auto_traits)
    }
}

impl fmt::Debug for SelfReportingRegistryOptions {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SelfReportingRegistryOptions")
            .field("logger", &self.logger.as_ref().map(|_| ".."))
            .finish()
    }
}

fn without_auto_traits(logger: &(dyn Capabilities + Send + Sync)) -> &dyn Capabilities {
    logger
}

/// Common metric parameters as they arrive from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "InvalidArgument")]
pub struct MetricOptions {
    /// Metric name.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[validate(custom = "crate::checks::check_metric_name")]
    pub name: Option<Value>,
    /// Metric dimensions.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[validate(custom = "crate::checks::check_optional_dimensions")]
    pub dimensions: Option<Value>,
    /// Publishing interval in seconds.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[validate(
        field = "publishingIntervalInSeconds",
        custom = "crate::checks::check_optional_publishing_interval"
    )]
    pub publishing_interval_in_seconds: Option<Value>,
}

/// Metric parameters after validation, as typed values.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedMetricOptions {
    /// Metric name (may be empty).
    pub name: String,
    /// Metric dimensions (empty when none were given).
    pub dimensions: Dimensions,
    /// Publishing interval, when one was given.
    pub publishing_interval: Option<PublishingInterval>,
}

impl MetricOptions {
    /// Decode options from a dynamic value, ignoring unknown keys.
    pub fn from_value(value: &Value) -> Result<Self, InvalidArgument> {
        decode("options", value)
    }

    /// Validate in name, dimensions, interval order and convert to typed values.
    pub fn into_validated(self) -> Result<ValidatedMetricOptions, InvalidArgument> {
        self.validate()?;

        let Some(Value::String(name)) = self.name else {
            return Err(InvalidArgument::type_mismatch("name", "a string", None));
        };
        let dimensions = match self.dimensions {
            Some(ref value) if !value.is_null() => Dimensions::from_value(value)
                .map_err(|error| crate::checks::dimension_error("dimensions", error))?,
            _ => Dimensions::new(),
        };
        let publishing_interval = match self.publishing_interval_in_seconds {
            Some(ref value) if !value.is_null() => {
                Some(PublishingInterval::from_value(value).map_err(|_| {
                    InvalidArgument::type_mismatch(
                        "publishingIntervalInSeconds",
                        "a number",
                        Some(value_kind(value)),
                    )
                })?)
            },
            _ => None,
        };

        Ok(ValidatedMetricOptions {
            name,
            dimensions,
            publishing_interval,
        })
    }
}

/// Keeps an explicit `null` as `Some(Value::Null)`; a missing key stays `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn decode<T>(parameter: &str, value: &Value) -> Result<T, InvalidArgument>
where
    T: for<'de> Deserialize<'de>,
{
    if !value.is_object() {
        return Err(InvalidArgument::type_mismatch(
            parameter,
            "an object",
            Some(value_kind(value)),
        ));
    }
    T::deserialize(value).map_err(|error| {
        <InvalidArgument as metrics_client_shared::ValidationError>::invalid(
            parameter,
            format!("could not be decoded: {error}"),
        )
    })
}
