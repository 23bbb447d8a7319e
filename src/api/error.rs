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

//! JSON error bodies and status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use log::error;
use serde::Serialize;
use utoipa::ToSchema;

use crate::cabinet::{CabinetError, INTERNAL_ERROR_MESSAGE};

/// API error response structure
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Convert CabinetError to HTTP status code
pub fn cabinet_error_to_status(err: &CabinetError) -> StatusCode {
    match err {
        CabinetError::NotFound(_) => StatusCode::NOT_FOUND,
        CabinetError::UpstreamQuery(_) | CabinetError::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Internal details stay in the log; clients see a generic message.
impl From<&CabinetError> for ErrorResponse {
    fn from(err: &CabinetError) -> Self {
        match err {
            CabinetError::NotFound(message) | CabinetError::UpstreamQuery(message) => {
                ErrorResponse::new(message.clone())
            }
            CabinetError::Internal(_) => ErrorResponse::new(INTERNAL_ERROR_MESSAGE),
        }
    }
}

impl IntoResponse for CabinetError {
    fn into_response(self) -> Response {
        match &self {
            CabinetError::Internal(detail) => error!("Internal error: {detail}"),
            CabinetError::UpstreamQuery(message) => error!("Data store error: {message}"),
            CabinetError::NotFound(_) => {}
        }

        let status = cabinet_error_to_status(&self);
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = CabinetError::NotFound("Versión no encontrada".to_string());
        assert_eq!(cabinet_error_to_status(&err), StatusCode::NOT_FOUND);
        assert_eq!(ErrorResponse::from(&err).error, "Versión no encontrada");
    }

    #[test]
    fn test_upstream_error_echoes_message() {
        let err = CabinetError::UpstreamQuery("permission denied for table cargos".to_string());
        assert_eq!(
            cabinet_error_to_status(&err),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorResponse::from(&err).error,
            "permission denied for table cargos"
        );
    }

    #[test]
    fn test_internal_error_is_generic() {
        let err = CabinetError::Internal("Failed to decode cargos rows".to_string());
        assert_eq!(
            cabinet_error_to_status(&err),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ErrorResponse::from(&err).error, "Error interno");
    }

    #[test]
    fn test_error_response_serialization() {
        let json = serde_json::to_string(&ErrorResponse::new("Versión no encontrada")).unwrap();
        assert_eq!(json, r#"{"error":"Versión no encontrada"}"#);
    }

    #[test]
    fn test_into_response_status() {
        let response = CabinetError::NotFound("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = CabinetError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
