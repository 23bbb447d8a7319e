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

//! HTTP surface of the server.
//!
//! - `GET /health` - liveness check
//! - `GET /api/{versionParam}` - every ministry of a version
//! - `GET /api/{versionParam}/{slugMinisterio}` - one ministry by slug
//! - `/docs/` and `/openapi.json` - Swagger UI and the OpenAPI document

pub mod error;
pub mod handlers;
pub mod openapi;
pub mod responses;
pub mod routes;

pub use error::{cabinet_error_to_status, ErrorResponse};
pub use handlers::{get_all_ministerios, get_ministerio, health_check};
pub use openapi::ApiDoc;
pub use responses::HealthResponse;
pub use routes::{build_app_router, build_cabinet_router};
