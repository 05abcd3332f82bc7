use axum::{extract::State, http::StatusCode, response::IntoResponse, response::Response, Json};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::types::WrapperState;

/// GET /health
/// Reports whether the server is up and what snapshot it is serving
pub async fn get_health(State(s): State<Arc<WrapperState>>) -> Response {
    info!("GET /health");

    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "catalog": s.config.catalog,
            "courses": s.catalog.len(),
            "skipped": s.catalog.skipped,
            "loaded_at": s.catalog.loaded_at.to_rfc3339(),
        })),
    )
        .into_response()
}
