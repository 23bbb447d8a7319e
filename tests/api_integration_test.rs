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

//! API Integration Tests
//!
//! These tests drive the full router against an in-memory snapshot store and
//! check the JSON returned for each route.

#![allow(clippy::unwrap_used)]

mod test_support;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;
use test_support::{fixture_router, get_json};

fn interior_v1() -> serde_json::Value {
    json!({
        "orden": 2,
        "nombre": "Ministerio del Interior",
        "web": "https://interior.gob.cl",
        "titular": {
            "nombres": "Ana",
            "apellidos": "Pérez",
            "cargo": "Ministra",
            "nacimiento": "1970-05-01",
            "profesion": "Abogada",
            "universidad": "Universidad de Chile",
            "partido": "Partido Uno",
            "genero": "F",
            "asume": "2022-03-11",
            "finaliza": null
        },
        "subsecretarias": [
            {
                "subsecretaria": "Subsecretaría del Interior",
                "web": "https://subinterior.gob.cl",
                "titular": {
                    "nombres": "Luis",
                    "apellidos": "Soto",
                    "cargo": "Subsecretario",
                    "nacimiento": null,
                    "profesion": null,
                    "universidad": null,
                    "partido": "",
                    "genero": "M",
                    "asume": "2022-03-11",
                    "finaliza": null
                }
            },
            {
                "subsecretaria": "Subsecretaría de Prevención del Delito",
                "web": null,
                "titular": null
            }
        ]
    })
}

// ============================================================================
// GET /api/{versionParam}/{slugMinisterio}
// ============================================================================

#[tokio::test]
async fn test_get_ministerio_by_slug() {
    let (status, body) = get_json(fixture_router(), "/api/v1/interior").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, interior_v1());
}

#[test_case("/api/v1/interior" ; "alias")]
#[test_case("/api/v1.0/interior" ; "full number")]
#[test_case("/api/1.0/interior" ; "without prefix")]
#[tokio::test]
async fn test_version_tokens_resolve_to_same_version(uri: &str) {
    let (status, body) = get_json(fixture_router(), uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["titular"]["cargo"], "Ministra");
}

#[tokio::test]
async fn test_get_ministerio_in_other_version() {
    let (status, body) = get_json(fixture_router(), "/api/v0/interior").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["titular"]["nombres"], "Luis");
    assert_eq!(body["titular"]["cargo"], "Ministro");
    assert_eq!(body["subsecretarias"][0]["titular"], serde_json::Value::Null);
    assert_eq!(body["subsecretarias"][1]["titular"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_vacant_ministerio_has_null_titular() {
    let (status, body) = get_json(fixture_router(), "/api/v1/hacienda").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "orden": 1,
            "nombre": "Ministerio de Hacienda",
            "web": "https://hacienda.gob.cl",
            "titular": null,
            "subsecretarias": []
        })
    );
}

#[tokio::test]
async fn test_ministerio_without_orden_omits_field() {
    let (status, body) = get_json(fixture_router(), "/api/v1/cultura").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("orden").is_none());
    assert_eq!(body["nombre"], "Ministerio de las Culturas");
}

#[tokio::test]
async fn test_unknown_slug_returns_404() {
    let (status, body) = get_json(fixture_router(), "/api/v1/defensa").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Ministerio 'defensa' no encontrado" }));
}

#[tokio::test]
async fn test_unknown_version_with_slug_returns_404() {
    let (status, body) = get_json(fixture_router(), "/api/v99/interior").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Versión no encontrada" }));
}

#[tokio::test]
async fn test_repeated_requests_return_same_body() {
    let router = fixture_router();
    let (_, first) = get_json(router.clone(), "/api/v1/interior").await;
    let (_, second) = get_json(router, "/api/v1/interior").await;

    assert_eq!(first, second);
}

// ============================================================================
// GET /api/{versionParam}
// ============================================================================

#[tokio::test]
async fn test_list_ministerios_in_order() {
    let (status, body) = get_json(fixture_router(), "/api/v1").await;

    assert_eq!(status, StatusCode::OK);
    let nombres: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["nombre"].as_str().unwrap())
        .collect();
    assert_eq!(
        nombres,
        vec![
            "Ministerio de Hacienda",
            "Ministerio del Interior",
            "Ministerio de las Culturas"
        ]
    );
}

#[tokio::test]
async fn test_list_entry_matches_single_ministerio() {
    let (_, list) = get_json(fixture_router(), "/api/v1").await;

    assert_eq!(list[1], interior_v1());
}

#[tokio::test]
async fn test_list_unknown_version_returns_404() {
    let (status, body) = get_json(fixture_router(), "/api/v99").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Versión no encontrada" }));
}

// ============================================================================
// Operational endpoints
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let (status, body) = get_json(fixture_router(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["data_store"], "snapshot");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_openapi_document_served() {
    let (status, body) = get_json(fixture_router(), "/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/{versionParam}/{slugMinisterio}"].is_object());
    assert_eq!(body["info"]["title"], "Gabinete API");
}
