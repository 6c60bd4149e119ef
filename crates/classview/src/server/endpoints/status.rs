use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::types::AppState;

/// GET /health
/// Basic liveness probe with the number of loaded schedules.
pub async fn get_health(State(s): State<Arc<AppState>>) -> Response {
    info!("GET /health");
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "schedules_loaded": s.store.len(),
        })),
    )
        .into_response()
}
