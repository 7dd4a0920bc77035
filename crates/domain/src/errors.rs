//! Domain errors for typed value objects.

use metrics_client_shared::{ErrorCode, ErrorEnvelope};
use std::fmt;

/// Failures while building typed domain values from dynamic input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Dimensions are not a key/value object (arrays included).
    DimensionsNotAnObject {
        /// Observed kind of the input.
        actual: &'static str,
    },
    /// A dimension value is not a string.
    DimensionValueNotString {
        /// Key holding the offending value.
        key: String,
        /// Observed kind of the value.
        actual: &'static str,
    },
    /// The publishing interval is not a number.
    IntervalNotANumber {
        /// Observed kind of the input.
        actual: &'static str,
    },
    /// A metric kind tag is not recognised.
    UnknownMetricKind {
        /// The rejected tag.
        tag: String,
    },
}

impl DomainError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::DimensionsNotAnObject { .. } | Self::DimensionValueNotString { .. } => {
                ErrorCode::new("domain", "invalid_dimensions")
            },
            Self::IntervalNotANumber { .. } => {
                ErrorCode::new("domain", "invalid_publishing_interval")
            },
            Self::UnknownMetricKind { .. } => ErrorCode::new("domain", "unknown_metric_kind"),
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionsNotAnObject { actual } => write!(
                formatter,
                "dimensions must be an object of string values, got {actual}"
            ),
            Self::DimensionValueNotString { key, actual } => write!(
                formatter,
                "dimension '{key}' must be a string, got {actual}"
            ),
            Self::IntervalNotANumber { actual } => write!(
                formatter,
                "publishingIntervalInSeconds must be a number, got {actual}"
            ),
            Self::UnknownMetricKind { tag } => {
                write!(formatter, "'{tag}' is not a known metric kind")
            },
        }
    }
}

impl std::error::Error for DomainError {}

impl From<DomainError> for ErrorEnvelope {
    fn from(error: DomainError) -> Self {
        let envelope = Self::expected(error.error_code(), error.to_string());
        match error {
            DomainError::DimensionsNotAnObject { actual }
            | DomainError::IntervalNotANumber { actual } => envelope.with_metadata("actual", actual),
            DomainError::DimensionValueNotString { key, actual } => envelope
                .with_metadata("key", key)
                .with_metadata("actual", actual),
            DomainError::UnknownMetricKind { tag } => envelope.with_metadata("tag", tag),
        }
    }
}
