//! API error envelope shared by all endpoints.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// JSON error body returned by failing endpoints.
#[derive(Debug, Serialize)]
pub struct ApiErrorType {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip)]
    pub status: StatusCode,
}

impl From<(StatusCode, &str, Option<String>)> for ApiErrorType {
    fn from((status, error, detail): (StatusCode, &str, Option<String>)) -> Self {
        Self {
            error: error.to_string(),
            detail,
            status,
        }
    }
}

impl IntoResponse for ApiErrorType {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(self)).into_response()
    }
}
