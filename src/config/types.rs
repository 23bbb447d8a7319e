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

//! Configuration types for the cabinet API server.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CabinetServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    pub data_store: DataStoreConfig,
    /// Column used to order the ministry listing.
    #[serde(default)]
    pub ordering: MinisterioOrdering,
}

/// HTTP listener and logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Serve permissive CORS headers.
    #[serde(default = "default_cors")]
    pub cors: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            cors: default_cors(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_cors() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    30
}

/// Backend holding the `versiones`, `ministerios`, `subsecretarias`,
/// `cargos`, `personas` and `partidos_politicos` tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", deny_unknown_fields)]
pub enum DataStoreConfig {
    /// Hosted database exposed through a PostgREST endpoint.
    Postgrest {
        url: String,
        api_key: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        schema: Option<String>,
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    },
    /// Tables read once from a local YAML or JSON file.
    Snapshot { path: PathBuf },
}

impl DataStoreConfig {
    pub fn kind(&self) -> &'static str {
        match self {
            DataStoreConfig::Postgrest { .. } => "postgrest",
            DataStoreConfig::Snapshot { .. } => "snapshot",
        }
    }
}

/// Ordering applied to `GET /api/{version}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MinisterioOrdering {
    /// Explicit `orden` column, rows without one last, ties by id.
    #[default]
    Orden,
    /// Insertion order.
    Id,
}

impl CabinetServerConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.port == 0 {
            return Err(anyhow::anyhow!("Invalid server port: 0"));
        }
        if self.server.host.trim().is_empty() {
            return Err(anyhow::anyhow!("Server host cannot be empty"));
        }

        match &self.data_store {
            DataStoreConfig::Postgrest {
                url,
                api_key,
                timeout_secs,
                ..
            } => {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(anyhow::anyhow!(
                        "Data store url must start with http:// or https://, got '{url}'"
                    ));
                }
                if api_key.trim().is_empty() {
                    return Err(anyhow::anyhow!("Data store api_key cannot be empty"));
                }
                if *timeout_secs == 0 {
                    return Err(anyhow::anyhow!("Data store timeout_secs must be > 0"));
                }
            }
            DataStoreConfig::Snapshot { path } => {
                if path.as_os_str().is_empty() {
                    return Err(anyhow::anyhow!("Snapshot path cannot be empty"));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn postgrest(url: &str, api_key: &str) -> CabinetServerConfig {
        CabinetServerConfig {
            server: ServerSettings::default(),
            data_store: DataStoreConfig::Postgrest {
                url: url.to_string(),
                api_key: api_key.to_string(),
                schema: None,
                timeout_secs: 30,
            },
            ordering: MinisterioOrdering::default(),
        }
    }

    #[test]
    fn test_server_defaults() {
        let settings = ServerSettings::default();
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 3000);
        assert_eq!(settings.log_level, "info");
        assert!(settings.cors);
    }

    #[test]
    fn test_valid_postgrest_config() {
        assert!(postgrest("https://abc.supabase.co", "key").validate().is_ok());
    }

    #[test]
    fn test_rejects_url_without_scheme() {
        let err = postgrest("abc.supabase.co", "key").validate().unwrap_err();
        assert!(err.to_string().contains("http"));
    }

    #[test]
    fn test_rejects_blank_api_key() {
        assert!(postgrest("https://abc.supabase.co", "  ").validate().is_err());
    }

    #[test]
    fn test_rejects_zero_port() {
        let mut config = postgrest("https://abc.supabase.co", "key");
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_snapshot_path() {
        let config = CabinetServerConfig {
            server: ServerSettings::default(),
            data_store: DataStoreConfig::Snapshot {
                path: PathBuf::new(),
            },
            ordering: MinisterioOrdering::Id,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_data_store_kind_tag() {
        let yaml = "kind: snapshot\npath: data/gabinete.yaml\n";
        let store: DataStoreConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(store.kind(), "snapshot");

        let yaml = "kind: postgrest\nurl: https://x.supabase.co\napi_key: k\n";
        let store: DataStoreConfig = serde_yaml::from_str(yaml).unwrap();
        match store {
            DataStoreConfig::Postgrest {
                timeout_secs,
                schema,
                ..
            } => {
                assert_eq!(timeout_secs, 30);
                assert!(schema.is_none());
            }
            other => panic!("unexpected store config: {other:?}"),
        }
    }

    #[test]
    fn test_ordering_parses_lowercase() {
        let ordering: MinisterioOrdering = serde_yaml::from_str("id").unwrap();
        assert_eq!(ordering, MinisterioOrdering::Id);
        assert_eq!(MinisterioOrdering::default(), MinisterioOrdering::Orden);
    }
}
