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

//! Nested JSON shape returned for each ministry.

use futures_util::future::join_all;
use log::warn;
use serde::Serialize;
use utoipa::ToSchema;

use super::titular::{resolve_titular, Titular};
use crate::store::{CabinetStore, MinisterioRow, SubsecretariaRow, UnitRef};

/// A ministry with its office-holder and sub-secretariats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MinisterioResponse {
    /// Display order, omitted when the ministry has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orden: Option<i64>,
    pub nombre: String,
    pub web: Option<String>,
    /// `null` when nobody holds the office in the requested version.
    pub titular: Option<Titular>,
    pub subsecretarias: Vec<SubsecretariaResponse>,
}

/// A sub-secretariat with its office-holder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SubsecretariaResponse {
    pub subsecretaria: String,
    pub web: Option<String>,
    pub titular: Option<Titular>,
}

/// Build the response for one ministry in `version_id`.
///
/// Holder and sub-secretariat lookups run concurrently; neither can fail the
/// whole response.
pub async fn assemble_ministerio(
    store: &dyn CabinetStore,
    version_id: i64,
    ministerio: MinisterioRow,
) -> MinisterioResponse {
    let (titular, subsecretarias) = tokio::join!(
        resolve_titular(store, version_id, UnitRef::Ministerio(ministerio.id)),
        assemble_subsecretarias(store, version_id, ministerio.id),
    );

    MinisterioResponse {
        orden: ministerio.orden,
        nombre: ministerio.nombre,
        web: ministerio.sitio_web,
        titular,
        subsecretarias,
    }
}

async fn assemble_subsecretarias(
    store: &dyn CabinetStore,
    version_id: i64,
    ministerio_id: i64,
) -> Vec<SubsecretariaResponse> {
    let rows = match store.list_subsecretarias(ministerio_id).await {
        Ok(rows) => rows,
        Err(e) => {
            warn!("Failed to list subsecretarias of ministerio {ministerio_id}: {e}");
            return Vec::new();
        }
    };

    join_all(
        rows.into_iter()
            .map(|sub| assemble_subsecretaria(store, version_id, sub)),
    )
    .await
}

async fn assemble_subsecretaria(
    store: &dyn CabinetStore,
    version_id: i64,
    sub: SubsecretariaRow,
) -> SubsecretariaResponse {
    let titular = resolve_titular(store, version_id, UnitRef::Subsecretaria(sub.id)).await;
    SubsecretariaResponse {
        subsecretaria: sub.nombre,
        web: sub.sitio_web,
        titular,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_titular_serialized_as_null_and_orden_omitted() {
        let response = MinisterioResponse {
            orden: None,
            nombre: "Cultura".to_string(),
            web: None,
            titular: None,
            subsecretarias: vec![SubsecretariaResponse {
                subsecretaria: "Subsecretaría de las Culturas".to_string(),
                web: Some("https://cultura.gob.cl".to_string()),
                titular: None,
            }],
        };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "nombre": "Cultura",
                "web": null,
                "titular": null,
                "subsecretarias": [
                    {
                        "subsecretaria": "Subsecretaría de las Culturas",
                        "web": "https://cultura.gob.cl",
                        "titular": null
                    }
                ]
            })
        );
    }

    #[test]
    fn test_orden_serialized_first_when_present() {
        let response = MinisterioResponse {
            orden: Some(4),
            nombre: "Hacienda".to_string(),
            web: None,
            titular: None,
            subsecretarias: Vec::new(),
        };

        let text = serde_json::to_string(&response).unwrap();
        assert!(text.starts_with(r#"{"orden":4,"nombre":"Hacienda""#));
    }
}
