//! Config loading helpers (file + env).
//!
//! Precedence (highest wins): env overrides, then file content, then
//! `ValidationConfig::default()`.

use crate::{
    ValidationConfig, ValidationEnv, apply_env_overrides, parse_validation_config_json,
    parse_validation_config_toml,
};
use metrics_client_shared::{ErrorClass, ErrorCode, ErrorEnvelope};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

/// Load the config from optional JSON text and env overrides.
pub fn load_validation_config_from_sources(
    config_json: Option<&str>,
    env: &ValidationEnv,
) -> Result<ValidationConfig, ErrorEnvelope> {
    let config = match config_json {
        None => ValidationConfig::default(),
        Some(input) => parse_validation_config_json(input)?,
    };
    apply_env_overrides(config, env)
}

/// Load the config from an optional file path and env overrides.
pub fn load_validation_config_from_path(
    config_path: Option<&Path>,
    env: &ValidationEnv,
) -> Result<ValidationConfig, ErrorEnvelope> {
    let config = match config_path {
        None => ValidationConfig::default(),
        Some(path) => {
            let text = read_config_file(path)?;
            let config = match detect_config_format(path)? {
                ConfigFormat::Json => parse_validation_config_json(&text),
                ConfigFormat::Toml => parse_validation_config_toml(&text),
            }
            .map_err(|error| error.with_metadata("path", path.to_string_lossy().to_string()))?;
            tracing::debug!(path = %path.display(), "validation config loaded");
            config
        },
    };
    apply_env_overrides(config, env)
}

/// Load the config from std env and an optional file path.
pub fn load_validation_config_std_env(
    config_path: Option<&Path>,
) -> Result<ValidationConfig, ErrorEnvelope> {
    let env = ValidationEnv::from_std_env().map_err(ErrorEnvelope::from)?;
    load_validation_config_from_path(config_path, &env)
}

/// Serialize the config as pretty JSON (with trailing newline).
pub fn to_pretty_json(config: &ValidationConfig) -> Result<String, ErrorEnvelope> {
    let mut output = serde_json::to_string_pretty(config).map_err(|error| {
        ErrorEnvelope::unexpected(
            ErrorCode::internal(),
            format!("failed to serialize config: {error}"),
            ErrorClass::NonRetriable,
        )
    })?;
    output.push('\n');
    Ok(output)
}

/// Serialize the config as pretty TOML (with trailing newline).
pub fn to_pretty_toml(config: &ValidationConfig) -> Result<String, ErrorEnvelope> {
    let mut output = toml::to_string_pretty(config).map_err(|error| {
        ErrorEnvelope::unexpected(
            ErrorCode::new("config", "serialize_toml"),
            format!("failed to serialize config TOML: {error}"),
            ErrorClass::NonRetriable,
        )
    })?;
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

fn read_config_file(path: &Path) -> Result<String, ErrorEnvelope> {
    std::fs::read_to_string(path).map_err(|error| {
        let code = match error.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::new("config", "config_file_not_found"),
            std::io::ErrorKind::PermissionDenied => {
                ErrorCode::new("config", "config_file_permission_denied")
            },
            _ => ErrorCode::new("config", "config_file_io"),
        };

        ErrorEnvelope::expected(code, format!("failed to read config file: {error}"))
            .with_metadata("path", path.to_string_lossy().to_string())
    })
}

fn detect_config_format(path: &Path) -> Result<ConfigFormat, ErrorEnvelope> {
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        None | Some("json") => Ok(ConfigFormat::Json),
        Some("toml") => Ok(ConfigFormat::Toml),
        Some(other) => Err(ErrorEnvelope::expected(
            ErrorCode::new("config", "unsupported_format"),
            "unsupported config format; use .json or .toml",
        )
        .with_metadata("extension", other.to_string())),
    }
}
