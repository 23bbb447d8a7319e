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

use anyhow::{anyhow, Result};
use std::sync::Arc;

use crate::config::MinisterioOrdering;
use crate::server::CabinetServer;
use crate::store::CabinetStore;

/// Builder for creating a CabinetServer instance programmatically
pub struct CabinetServerBuilder {
    store: Option<Arc<dyn CabinetStore>>,
    ordering: MinisterioOrdering,
    port: u16,
    host: String,
    enable_cors: bool,
}

impl Default for CabinetServerBuilder {
    fn default() -> Self {
        Self {
            store: None,
            ordering: MinisterioOrdering::default(),
            port: 3000,
            host: "127.0.0.1".to_string(),
            enable_cors: true,
        }
    }
}

impl CabinetServerBuilder {
    /// Create a new CabinetServerBuilder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the data store backing every request
    pub fn with_store(mut self, store: Arc<dyn CabinetStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the ministry listing order
    pub fn with_ordering(mut self, ordering: MinisterioOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_cors(mut self, enable: bool) -> Self {
        self.enable_cors = enable;
        self
    }

    /// Build the server
    ///
    /// # Errors
    ///
    /// Returns an error if no store was provided.
    pub fn build(self) -> Result<CabinetServer> {
        let store = self
            .store
            .ok_or_else(|| anyhow!("A data store is required; call with_store()"))?;

        Ok(CabinetServer::from_store(
            store,
            self.ordering,
            self.host,
            self.port,
            self.enable_cors,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{SnapshotStore, SnapshotTables};

    #[test]
    fn test_build_requires_store() {
        let result = CabinetServerBuilder::new().build();
        assert!(result.is_err());
    }

    #[test]
    fn test_build_with_snapshot_store() {
        let store = Arc::new(SnapshotStore::new(SnapshotTables::default()));
        let server = CabinetServerBuilder::new()
            .with_store(store)
            .with_port(8181)
            .with_ordering(MinisterioOrdering::Id)
            .build()
            .unwrap();

        assert_eq!(server.port(), 8181);
        assert_eq!(server.service().ordering(), MinisterioOrdering::Id);
        assert_eq!(server.service().store().name(), "snapshot");
    }
}
