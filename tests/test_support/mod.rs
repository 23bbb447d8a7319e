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

//! Shared fixtures for the integration tests.
//!
//! Two versions: `0` (id 6) and `1.0` (id 7). In version `1.0` Interior
//! is held by Ana Pérez, Hacienda and Cultura are vacant, and one of the two
//! Interior sub-secretariats is held by Luis Soto, who has no party.

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use gabinete_api::api::build_app_router;
use gabinete_api::cabinet::CabinetService;
use gabinete_api::store::snapshot::{CargoRecord, PartidoRecord, PersonaRecord};
use gabinete_api::store::{MinisterioRow, SubsecretariaRow, VersionRow};
use gabinete_api::{MinisterioOrdering, SnapshotStore, SnapshotTables};
use std::sync::Arc;
use tower::ServiceExt;

pub const VERSION_0_ID: i64 = 6;
pub const VERSION_1_ID: i64 = 7;

fn ministerio(id: i64, nombre: &str, slug: &str, orden: Option<i64>) -> MinisterioRow {
    MinisterioRow {
        id,
        nombre: nombre.to_string(),
        sitio_web: Some(format!("https://{slug}.gob.cl")),
        slug: Some(slug.to_string()),
        orden,
    }
}

fn cargo(
    id: i64,
    version_id: i64,
    ministerio_id: Option<i64>,
    subsecretaria_id: Option<i64>,
    persona_id: i64,
    nombre_cargo: &str,
) -> CargoRecord {
    CargoRecord {
        id,
        version_id,
        ministerio_id,
        subsecretaria_id,
        persona_id: Some(persona_id),
        nombre_cargo: nombre_cargo.to_string(),
        fecha_inicio: Some("2022-03-11".to_string()),
        fecha_fin: None,
    }
}

pub fn fixture_tables() -> SnapshotTables {
    SnapshotTables {
        versiones: vec![
            VersionRow {
                id: VERSION_0_ID,
                numero_version: "0".to_string(),
            },
            VersionRow {
                id: VERSION_1_ID,
                numero_version: "1.0".to_string(),
            },
        ],
        ministerios: vec![
            ministerio(1, "Ministerio del Interior", "interior", Some(2)),
            ministerio(2, "Ministerio de Hacienda", "hacienda", Some(1)),
            ministerio(3, "Ministerio de las Culturas", "cultura", None),
        ],
        subsecretarias: vec![
            SubsecretariaRow {
                id: 10,
                nombre: "Subsecretaría del Interior".to_string(),
                sitio_web: Some("https://subinterior.gob.cl".to_string()),
                ministerio_id: Some(1),
            },
            SubsecretariaRow {
                id: 11,
                nombre: "Subsecretaría de Prevención del Delito".to_string(),
                sitio_web: None,
                ministerio_id: Some(1),
            },
        ],
        cargos: vec![
            cargo(1000, VERSION_1_ID, Some(1), None, 100, "Ministra"),
            cargo(1001, VERSION_1_ID, Some(1), Some(10), 101, "Subsecretario"),
            cargo(1002, VERSION_0_ID, Some(1), None, 101, "Ministro"),
        ],
        personas: vec![
            PersonaRecord {
                id: 100,
                nombres: Some("Ana".to_string()),
                apellidos: Some("Pérez".to_string()),
                fecha_nacimiento: Some("1970-05-01".to_string()),
                profesion: Some("Abogada".to_string()),
                universidad: Some("Universidad de Chile".to_string()),
                genero: Some("F".to_string()),
                partido_politico_id: Some(1),
            },
            PersonaRecord {
                id: 101,
                nombres: Some("Luis".to_string()),
                apellidos: Some("Soto".to_string()),
                genero: Some("M".to_string()),
                ..Default::default()
            },
        ],
        partidos_politicos: vec![PartidoRecord {
            id: 1,
            nombre: "Partido Uno".to_string(),
        }],
    }
}

pub fn fixture_service() -> CabinetService {
    CabinetService::new(
        Arc::new(SnapshotStore::new(fixture_tables())),
        MinisterioOrdering::Orden,
    )
}

pub fn fixture_router() -> Router {
    build_app_router(fixture_service(), true)
}

/// Send a GET through `router` and decode the JSON body.
pub async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap();
    (status, json)
}
