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

//! Handler functions with OpenAPI documentation.

use axum::{
    extract::{Extension, Path},
    response::Json,
};
use log::debug;
use serde::Deserialize;

use super::error::ErrorResponse;
use super::responses::HealthResponse;
use crate::cabinet::{CabinetError, CabinetService, MinisterioResponse};

/// Path parameter for `/api/{versionParam}`
#[derive(Debug, Deserialize)]
pub struct VersionPath {
    #[serde(rename = "versionParam")]
    pub version_param: String,
}

/// Path parameters for `/api/{versionParam}/{slugMinisterio}`
#[derive(Debug, Deserialize)]
pub struct MinisterioPath {
    #[serde(rename = "versionParam")]
    pub version_param: String,
    #[serde(rename = "slugMinisterio")]
    pub slug_ministerio: String,
}

/// Check server health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse),
    ),
    tag = "Health"
)]
pub async fn health_check(Extension(service): Extension<CabinetService>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        data_store: service.store().name().to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List every ministry of a version
///
/// Each ministry carries its office-holder for that version (or `null`) and
/// its sub-secretariats with their own office-holders.
#[utoipa::path(
    get,
    path = "/api/{versionParam}",
    params(
        ("versionParam" = String, Path, description = "Version token: v0, v1, v1.0, ...")
    ),
    responses(
        (status = 200, description = "Ministries of the version", body = [MinisterioResponse]),
        (status = 404, description = "Unknown version", body = ErrorResponse),
        (status = 500, description = "Data store failure", body = ErrorResponse),
    ),
    tag = "Ministerios"
)]
pub async fn get_all_ministerios(
    Extension(service): Extension<CabinetService>,
    Path(VersionPath { version_param }): Path<VersionPath>,
) -> Result<Json<Vec<MinisterioResponse>>, CabinetError> {
    debug!("Listing ministerios for version '{version_param}'");
    let ministerios = service.ministerios(&version_param).await?;
    Ok(Json(ministerios))
}

/// Get one ministry of a version by slug
#[utoipa::path(
    get,
    path = "/api/{versionParam}/{slugMinisterio}",
    params(
        ("versionParam" = String, Path, description = "Version token: v0, v1, v1.0, ..."),
        ("slugMinisterio" = String, Path, description = "Ministry slug, e.g. interior")
    ),
    responses(
        (status = 200, description = "The ministry", body = MinisterioResponse),
        (status = 404, description = "Unknown version or ministry", body = ErrorResponse),
        (status = 500, description = "Data store failure", body = ErrorResponse),
    ),
    tag = "Ministerios"
)]
pub async fn get_ministerio(
    Extension(service): Extension<CabinetService>,
    Path(MinisterioPath {
        version_param,
        slug_ministerio,
    }): Path<MinisterioPath>,
) -> Result<Json<MinisterioResponse>, CabinetError> {
    debug!("Fetching ministerio '{slug_ministerio}' for version '{version_param}'");
    let ministerio = service.ministerio(&version_param, &slug_ministerio).await?;
    Ok(Json(ministerio))
}
