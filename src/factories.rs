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

//! Factory functions for creating data stores from config.
//!
//! This module matches on the tagged [`DataStoreConfig`] enum and calls the
//! matching store constructor.

use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;
use std::time::Duration;

use crate::config::DataStoreConfig;
use crate::store::{CabinetStore, PostgrestStore, SnapshotStore};

/// Create a data store from configuration.
///
/// Supported kinds:
/// - `postgrest` - hosted database behind a PostgREST endpoint
/// - `snapshot` - tables loaded once from a local YAML/JSON file
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the snapshot file
/// cannot be read.
pub fn create_store(config: &DataStoreConfig) -> Result<Arc<dyn CabinetStore>> {
    match config {
        DataStoreConfig::Postgrest {
            url,
            api_key,
            schema,
            timeout_secs,
        } => {
            info!("Using PostgREST data store at {url}");
            let store = PostgrestStore::new(
                url.clone(),
                api_key.clone(),
                schema.clone(),
                Duration::from_secs(*timeout_secs),
            )
            .context("Failed to create PostgREST data store")?;
            Ok(Arc::new(store))
        }
        DataStoreConfig::Snapshot { path } => {
            let store = SnapshotStore::load(path).with_context(|| {
                format!("Failed to load snapshot data store '{}'", path.display())
            })?;
            Ok(Arc::new(store))
        }
    }
}
