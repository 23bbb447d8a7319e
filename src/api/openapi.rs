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

//! OpenAPI documentation.
//!
//! The document is served at `/openapi.json` and the Swagger UI at `/docs/`.

use utoipa::OpenApi;

use super::error::ErrorResponse;
use super::responses::HealthResponse;
use crate::cabinet::{MinisterioResponse, SubsecretariaResponse, Titular};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::health_check,
        super::handlers::get_all_ministerios,
        super::handlers::get_ministerio,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            MinisterioResponse,
            SubsecretariaResponse,
            Titular,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Ministerios", description = "Cabinet composition per administration version"),
    ),
    info(
        title = "Gabinete API",
        version = "1.0.0",
        description = "Read-only API over the composition of the executive cabinet.\n\nEach administration version (`v0`, `v1`, ...) is a snapshot of who held each ministry and sub-secretariat.\n\n## Routes\n\n- `/api/{versionParam}` - every ministry of a version\n- `/api/{versionParam}/{slugMinisterio}` - one ministry by slug",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    )
)]
pub struct ApiDoc;
