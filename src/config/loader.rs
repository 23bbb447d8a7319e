// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Configuration loading with automatic environment variable interpolation.

use super::env_interpolation;
use super::types::CabinetServerConfig;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Configuration used when no file is present. Every value comes from the
/// process environment, matching a plain `.env` deployment.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"
server:
  host: "${HOST:-0.0.0.0}"
  port: ${PORT:-3000}
  log_level: "${LOG_LEVEL:-info}"
data_store:
  kind: postgrest
  url: "${SUPABASE_URL}"
  api_key: "${SUPABASE_ANON_KEY}"
"#;

/// Unified error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Environment variable interpolation failed: {0}")]
    InterpolationError(#[from] env_interpolation::InterpolationError),

    #[error("Failed to parse config file '{path}': YAML error: {yaml_err}, JSON error: {json_err}")]
    ParseError {
        path: String,
        yaml_err: String,
        json_err: String,
    },

    #[error("Validation error: {0}")]
    ValidationError(#[from] anyhow::Error),
}

/// Deserialize YAML after interpolating `${VAR}` references.
pub fn from_yaml_str<T: DeserializeOwned>(s: &str) -> Result<T, ConfigError> {
    let interpolated = env_interpolation::interpolate(s)?;
    Ok(serde_yaml::from_str(&interpolated)?)
}

/// Deserialize JSON after interpolating `${VAR}` references.
pub fn from_json_str<T: DeserializeOwned>(s: &str) -> Result<T, ConfigError> {
    let interpolated = env_interpolation::interpolate(s)?;
    Ok(serde_json::from_str(&interpolated)?)
}

/// Parse `content` as YAML, falling back to JSON, without interpolation.
///
/// `origin` only appears in the error message.
pub fn parse_yaml_or_json<T: DeserializeOwned>(content: &str, origin: &str) -> Result<T, ConfigError> {
    match serde_yaml::from_str::<T>(content) {
        Ok(value) => Ok(value),
        Err(yaml_err) => match serde_json::from_str::<T>(content) {
            Ok(value) => Ok(value),
            Err(json_err) => Err(ConfigError::ParseError {
                path: origin.to_string(),
                yaml_err: yaml_err.to_string(),
                json_err: json_err.to_string(),
            }),
        },
    }
}

/// Load and validate a configuration file (YAML or JSON).
///
/// # Errors
///
/// Returns an error if the file cannot be read, a referenced environment
/// variable is missing, the content is neither YAML nor JSON, or
/// validation fails.
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<CabinetServerConfig, ConfigError> {
    let path_ref = path.as_ref();
    let content = fs::read_to_string(path_ref)?;
    let interpolated = env_interpolation::interpolate(&content)?;

    let config: CabinetServerConfig =
        parse_yaml_or_json(&interpolated, &path_ref.display().to_string())?;
    config.validate()?;

    Ok(config)
}

/// Build the configuration from [`DEFAULT_CONFIG_TEMPLATE`].
pub fn default_config() -> Result<CabinetServerConfig, ConfigError> {
    let config: CabinetServerConfig = from_yaml_str(DEFAULT_CONFIG_TEMPLATE)?;
    config.validate()?;
    Ok(config)
}
