use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

pub async fn host_info(State(state): State<AppState>) -> impl IntoResponse {
    let os = hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| "unknown".to_string());

    Json(json!({
        "os": os,
        "env": state.config.environment,
    }))
}
