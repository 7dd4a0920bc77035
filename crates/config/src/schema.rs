//! Validation configuration schema and parsing.

use metrics_client_domain::{MetricKind, MetricKindSet};
use metrics_client_shared::{ErrorCode, ErrorEnvelope};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validation settings shared by every metric constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct ValidationConfig {
    /// Kind tags a registered metric may report from `getType()`.
    pub metric_kinds: Vec<String>,
    /// Reject empty metric names in addition to non-string ones.
    pub reject_empty_names: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            metric_kinds: MetricKind::ALL
                .iter()
                .map(|kind| kind.as_str().to_owned())
                .collect(),
            reject_empty_names: false,
        }
    }
}

impl ValidationConfig {
    /// Accepted kinds as a set (duplicates collapse).
    #[must_use]
    pub fn metric_kind_set(&self) -> MetricKindSet {
        MetricKindSet::from_tags(self.metric_kinds.iter().map(String::as_str))
    }

    /// Check structural rules serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigSchemaError> {
        if self.metric_kinds.is_empty() {
            return Err(ConfigSchemaError::NoMetricKinds);
        }
        if let Some(index) = self
            .metric_kinds
            .iter()
            .position(|tag| tag.trim().is_empty())
        {
            return Err(ConfigSchemaError::EmptyMetricKind { index });
        }
        Ok(())
    }
}

/// Structural config failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSchemaError {
    /// `metricKinds` was an empty list.
    NoMetricKinds,
    /// A `metricKinds` entry was blank.
    EmptyMetricKind {
        /// Position of the blank entry.
        index: usize,
    },
}

impl fmt::Display for ConfigSchemaError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMetricKinds => formatter.write_str("metricKinds must list at least one kind"),
            Self::EmptyMetricKind { index } => {
                write!(formatter, "metricKinds[{index}] must be non-empty")
            },
        }
    }
}

impl std::error::Error for ConfigSchemaError {}

impl From<ConfigSchemaError> for ErrorEnvelope {
    fn from(error: ConfigSchemaError) -> Self {
        let message = error.to_string();
        match error {
            ConfigSchemaError::NoMetricKinds => {
                Self::expected(ErrorCode::new("config", "no_metric_kinds"), message)
            },
            ConfigSchemaError::EmptyMetricKind { index } => {
                Self::expected(ErrorCode::new("config", "empty_metric_kind"), message)
                    .with_metadata("index", index.to_string())
            },
        }
    }
}

/// Parse and check a JSON config document.
pub fn parse_validation_config_json(input: &str) -> Result<ValidationConfig, ErrorEnvelope> {
    let config: ValidationConfig = serde_json::from_str(input).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "invalid_json"),
            format!("invalid config JSON: {error}"),
        )
        .with_metadata("source", "config")
    })?;
    config.validate()?;
    Ok(config)
}

/// Parse and check a TOML config document.
pub fn parse_validation_config_toml(input: &str) -> Result<ValidationConfig, ErrorEnvelope> {
    let config: ValidationConfig = toml::from_str(input).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "invalid_toml"),
            format!("invalid config TOML: {error}"),
        )
        .with_metadata("source", "config")
    })?;
    config.validate()?;
    Ok(config)
}

/// JSON Schema for the config file format.
#[must_use]
pub fn validation_config_schema() -> Schema {
    schema_for!(ValidationConfig)
}
