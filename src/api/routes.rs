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

//! Route definitions.
//!
//! The cabinet routes are designed to be nested under `/api/`; the
//! application router adds the operational endpoints and Swagger UI.

use axum::{extract::Extension, routing::get, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers;
use super::openapi::ApiDoc;
use crate::cabinet::CabinetService;

/// Build the cabinet router.
pub fn build_cabinet_router(service: CabinetService) -> Router {
    Router::new()
        .route("/:versionParam", get(handlers::get_all_ministerios))
        .route(
            "/:versionParam/:slugMinisterio",
            get(handlers::get_ministerio),
        )
        .layer(Extension(service))
}

/// Build the complete application router.
pub fn build_app_router(service: CabinetService, enable_cors: bool) -> Router {
    let app = Router::new()
        // Health check at root level
        .route("/health", get(handlers::health_check))
        .layer(Extension(service.clone()))
        .nest("/api", build_cabinet_router(service))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()));

    if enable_cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}
