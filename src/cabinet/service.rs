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

use futures_util::future::join_all;
use std::sync::Arc;

use super::assembler::{assemble_ministerio, MinisterioResponse};
use super::error::CabinetError;
use super::version::resolve_version;
use crate::config::MinisterioOrdering;
use crate::store::CabinetStore;

/// Entry point used by the HTTP handlers.
///
/// Cheap to clone; every clone shares the same store.
#[derive(Clone)]
pub struct CabinetService {
    store: Arc<dyn CabinetStore>,
    ordering: MinisterioOrdering,
}

impl CabinetService {
    pub fn new(store: Arc<dyn CabinetStore>, ordering: MinisterioOrdering) -> Self {
        Self { store, ordering }
    }

    pub fn store(&self) -> &Arc<dyn CabinetStore> {
        &self.store
    }

    pub fn ordering(&self) -> MinisterioOrdering {
        self.ordering
    }

    /// Every ministry as of the version named by `version_token`.
    pub async fn ministerios(
        &self,
        version_token: &str,
    ) -> Result<Vec<MinisterioResponse>, CabinetError> {
        let store = self.store.as_ref();
        let version_id = resolve_version(store, version_token).await?;
        let rows = store.list_ministerios(self.ordering).await?;

        Ok(join_all(
            rows.into_iter()
                .map(|ministerio| assemble_ministerio(store, version_id, ministerio)),
        )
        .await)
    }

    /// The ministry with `slug` as of the version named by `version_token`.
    pub async fn ministerio(
        &self,
        version_token: &str,
        slug: &str,
    ) -> Result<MinisterioResponse, CabinetError> {
        let store = self.store.as_ref();
        let version_id = resolve_version(store, version_token).await?;
        let ministerio = store
            .find_ministerio_by_slug(slug)
            .await?
            .ok_or_else(|| CabinetError::ministerio_not_found(slug))?;

        Ok(assemble_ministerio(store, version_id, ministerio).await)
    }
}
