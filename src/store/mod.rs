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

//! Read access to the cabinet tables.
//!
//! The store owns `versiones`, `ministerios`, `subsecretarias`, `cargos`,
//! `personas` and `partidos_politicos`. This crate never writes to it.
//!
//! Two backends implement [`CabinetStore`]:
//! - [`PostgrestStore`] - hosted database reached through its PostgREST API
//! - [`SnapshotStore`] - the same tables loaded from a local file

pub mod models;
pub mod postgrest;
pub mod snapshot;

use async_trait::async_trait;

use crate::config::MinisterioOrdering;

pub use models::{
    CargoRow, MinisterioRow, PartidoRow, PersonaRow, SubsecretariaRow, UnitRef, VersionRow,
};
pub use postgrest::{PostgrestStore, TableQuery};
pub use snapshot::{SnapshotStore, SnapshotTables};

/// Errors reported by a [`CabinetStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The request never produced a response.
    #[error("Data store request failed: {0}")]
    Transport(String),

    /// The data store answered with an error payload.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// The response body did not match the expected projection.
    #[error("Failed to decode {table} rows: {reason}")]
    Decode { table: String, reason: String },

    /// More rows than the fetch mode allows.
    #[error("Expected at most one row from {table}, got {rows}")]
    Cardinality { table: String, rows: usize },

    /// Exactly one row was required and none matched.
    #[error("Expected exactly one row from {table}, got none")]
    Missing { table: String },

    #[error("Failed to load snapshot: {0}")]
    Snapshot(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Transport(err.to_string())
    }
}

/// Queries issued while answering a request.
///
/// Implementations are shared across all requests behind an `Arc` and must
/// not hold per-request state.
#[async_trait]
pub trait CabinetStore: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &str;

    /// The version whose `numero_version` equals `numero`, if any.
    async fn find_version(&self, numero: &str) -> Result<Option<VersionRow>, StoreError>;

    /// All ministries in the requested order.
    async fn list_ministerios(
        &self,
        ordering: MinisterioOrdering,
    ) -> Result<Vec<MinisterioRow>, StoreError>;

    /// The ministry with the given slug, if any.
    async fn find_ministerio_by_slug(&self, slug: &str)
        -> Result<Option<MinisterioRow>, StoreError>;

    /// Sub-secretariats of a ministry, by id.
    async fn list_subsecretarias(
        &self,
        ministerio_id: i64,
    ) -> Result<Vec<SubsecretariaRow>, StoreError>;

    /// First office assignment (by id) for `unit` in `version_id`.
    ///
    /// For a ministry only assignments without a sub-secretariat reference
    /// count.
    async fn find_cargo(
        &self,
        version_id: i64,
        unit: UnitRef,
    ) -> Result<Option<CargoRow>, StoreError>;
}
