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

//! Configuration management for the cabinet API server.
//!
//! Configuration files are YAML or JSON and may reference environment
//! variables with `${VAR_NAME}` or `${VAR_NAME:-default}`. When no file is
//! present the server falls back to [`DEFAULT_CONFIG_TEMPLATE`], which reads
//! `SUPABASE_URL`, `SUPABASE_ANON_KEY`, `HOST`, `PORT` and `LOG_LEVEL`.
//!
//! ```yaml
//! server:
//!   host: "${HOST:-0.0.0.0}"
//!   port: ${PORT:-3000}
//!   log_level: info
//!
//! data_store:
//!   kind: postgrest
//!   url: "${SUPABASE_URL}"
//!   api_key: "${SUPABASE_ANON_KEY}"
//!
//! ordering: orden
//! ```

pub mod env_interpolation;
pub mod loader;
pub mod types;

pub use loader::{
    default_config, from_json_str, from_yaml_str, load_config_file, parse_yaml_or_json,
    ConfigError, DEFAULT_CONFIG_TEMPLATE,
};
pub use types::{CabinetServerConfig, DataStoreConfig, MinisterioOrdering, ServerSettings};
