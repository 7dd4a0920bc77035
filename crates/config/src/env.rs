//! Environment variable parsing and env-to-config merging.
//!
//! Env parsing is strict: a variable that is present but blank or malformed
//! fails instead of being ignored. Kind lists keep their given order with
//! duplicates removed.

use crate::schema::ValidationConfig;
use metrics_client_shared::{ErrorCode, ErrorEnvelope};
use std::collections::BTreeMap;
use std::fmt;

/// Env var: comma-separated list of accepted metric kind tags.
pub const ENV_METRIC_KINDS: &str = "METRICS_CLIENT_METRIC_KINDS";
/// Env var: reject empty metric names.
pub const ENV_REJECT_EMPTY_NAMES: &str = "METRICS_CLIENT_REJECT_EMPTY_NAMES";

const MAX_CSV_ITEMS: usize = 1_000;

/// Typed env-derived overrides for [`ValidationConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationEnv {
    /// Override for `metricKinds`.
    pub metric_kinds: Option<Vec<String>>,
    /// Override for `rejectEmptyNames`.
    pub reject_empty_names: Option<bool>,
}

impl ValidationEnv {
    /// Parse env overrides from a key/value map (useful for tests and fixtures).
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self, EnvParseError> {
        Ok(Self {
            metric_kinds: parse_optional_csv(map, ENV_METRIC_KINDS)?,
            reject_empty_names: parse_optional_bool(map, ENV_REJECT_EMPTY_NAMES)?,
        })
    }

    /// Parse env overrides from the current process environment.
    pub fn from_std_env() -> Result<Self, EnvParseError> {
        let mut map = BTreeMap::new();
        for name in [ENV_METRIC_KINDS, ENV_REJECT_EMPTY_NAMES] {
            if let Ok(value) = std::env::var(name) {
                map.insert(name.to_owned(), value);
            }
        }
        Self::from_map(&map)
    }

    /// Returns true when no override is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.metric_kinds.is_none() && self.reject_empty_names.is_none()
    }
}

/// Apply env overrides on top of `config` and re-check the result.
pub fn apply_env_overrides(
    mut config: ValidationConfig,
    env: &ValidationEnv,
) -> Result<ValidationConfig, ErrorEnvelope> {
    if let Some(kinds) = &env.metric_kinds {
        tracing::debug!(env_var = ENV_METRIC_KINDS, count = kinds.len(), "metric kinds overridden");
        config.metric_kinds.clone_from(kinds);
    }
    if let Some(reject) = env.reject_empty_names {
        tracing::debug!(env_var = ENV_REJECT_EMPTY_NAMES, reject, "name policy overridden");
        config.reject_empty_names = reject;
    }
    config.validate()?;
    Ok(config)
}

/// Validation failures when parsing env variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvParseError {
    /// An env var was present but empty after trimming.
    EmptyValue {
        /// Env var name.
        var: &'static str,
    },
    /// Boolean env var had an invalid value.
    InvalidBool {
        /// Env var name.
        var: &'static str,
        /// Raw input value.
        value: String,
    },
    /// CSV list contained a blank entry.
    EmptyCsvEntry {
        /// Env var name.
        var: &'static str,
        /// Position of the blank entry.
        index: usize,
    },
    /// CSV list exceeds a safety limit.
    CsvTooLarge {
        /// Env var name.
        var: &'static str,
        /// Number of parsed items.
        len: usize,
        /// Maximum allowed.
        max: usize,
    },
}

impl EnvParseError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::EmptyValue { .. } => ErrorCode::new("config", "empty_env_var"),
            Self::InvalidBool { .. } => ErrorCode::new("config", "invalid_env_bool"),
            Self::EmptyCsvEntry { .. } | Self::CsvTooLarge { .. } => {
                ErrorCode::new("config", "invalid_env_csv")
            },
        }
    }
}

impl fmt::Display for EnvParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyValue { var } => write!(formatter, "{var} must be non-empty"),
            Self::InvalidBool { var, .. } => write!(formatter, "{var} must be a boolean"),
            Self::EmptyCsvEntry { var, index } => {
                write!(formatter, "{var} entry {index} must be non-empty")
            },
            Self::CsvTooLarge { var, len, max } => {
                write!(formatter, "{var} is too large ({len} items, max {max})")
            },
        }
    }
}

impl std::error::Error for EnvParseError {}

impl From<EnvParseError> for ErrorEnvelope {
    fn from(error: EnvParseError) -> Self {
        let code = error.error_code();
        let message = error.to_string();
        let envelope = Self::expected(code, message);

        match error {
            EnvParseError::EmptyValue { var } => envelope.with_metadata("env_var", var),
            EnvParseError::InvalidBool { var, value } => envelope
                .with_metadata("env_var", var)
                .with_metadata("value", value),
            EnvParseError::EmptyCsvEntry { var, index } => envelope
                .with_metadata("env_var", var)
                .with_metadata("index", index.to_string()),
            EnvParseError::CsvTooLarge { var, len, max } => envelope
                .with_metadata("env_var", var)
                .with_metadata("len", len.to_string())
                .with_metadata("max", max.to_string()),
        }
    }
}

fn parse_optional_bool(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<bool>, EnvParseError> {
    let Some(raw) = map.get(var) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EnvParseError::EmptyValue { var });
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(EnvParseError::InvalidBool {
            var,
            value: raw.clone(),
        }),
    }
}

fn parse_optional_csv(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<Vec<String>>, EnvParseError> {
    let Some(raw) = map.get(var) else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Err(EnvParseError::EmptyValue { var });
    }

    let mut items: Vec<String> = Vec::new();
    for (index, entry) in raw.split(',').enumerate() {
        let entry = entry.trim();
        if entry.is_empty() {
            return Err(EnvParseError::EmptyCsvEntry { var, index });
        }
        if !items.iter().any(|existing| existing == entry) {
            items.push(entry.to_owned());
        }
    }

    if items.len() > MAX_CSV_ITEMS {
        return Err(EnvParseError::CsvTooLarge {
            var,
            len: items.len(),
            max: MAX_CSV_ITEMS,
        });
    }
    Ok(Some(items))
}
