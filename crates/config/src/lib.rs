//! # metrics-client-config
//!
//! Validation configuration: accepted metric kinds and the metric-name policy,
//! loaded from JSON or TOML with env overrides.
//! This crate depends on `domain` and `shared` only.

/// Environment variable parsing and merging.
pub mod env;
/// Config loading helpers (file + env).
pub mod load;
/// Configuration schema types and helpers.
pub mod schema;

pub use env::{
    ENV_METRIC_KINDS, ENV_REJECT_EMPTY_NAMES, EnvParseError, ValidationEnv, apply_env_overrides,
};
pub use load::{
    load_validation_config_from_path, load_validation_config_from_sources,
    load_validation_config_std_env, to_pretty_json, to_pretty_toml,
};
pub use schema::{
    ConfigSchemaError, ValidationConfig, parse_validation_config_json,
    parse_validation_config_toml, validation_config_schema,
};

/// Returns the config crate version.
#[must_use]
pub const fn config_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
