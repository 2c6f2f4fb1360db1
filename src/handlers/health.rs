use axum::{response::IntoResponse, Json};
use serde_json::json;

pub async fn liveness() -> impl IntoResponse {
    Json(json!({ "status": "live" }))
}

/// Readiness does not consult the record store; the endpoint reports ready
/// for as long as the process is serving.
pub async fn readiness() -> impl IntoResponse {
    Json(json!({ "status": "ready" }))
}
