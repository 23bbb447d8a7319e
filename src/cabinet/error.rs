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

use crate::store::StoreError;

pub const VERSION_NOT_FOUND: &str = "Versión no encontrada";
pub const INTERNAL_ERROR_MESSAGE: &str = "Error interno";

/// Failure of a request-level lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CabinetError {
    /// Unknown version token or ministry slug.
    #[error("{0}")]
    NotFound(String),

    /// The data store rejected a required read; the message is its own.
    #[error("{0}")]
    UpstreamQuery(String),

    /// Anything else: transport failures, undecodable rows, ambiguous matches.
    #[error("{0}")]
    Internal(String),
}

impl CabinetError {
    pub fn ministerio_not_found(slug: &str) -> Self {
        CabinetError::NotFound(format!("Ministerio '{slug}' no encontrado"))
    }
}

impl From<StoreError> for CabinetError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Upstream { message, .. } => CabinetError::UpstreamQuery(message),
            other => CabinetError::Internal(other.to_string()),
        }
    }
}
