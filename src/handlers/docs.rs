use crate::error::AppError;
use crate::startup::AppState;
use axum::{extract::State, Json};

/// Reads the OpenAPI document from disk on every request and returns its
/// parsed contents verbatim.
pub async fn api_docs(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let path = &state.config.content.docs_path;

    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        tracing::error!("Error reading file {}: {}", path, e);
        AppError::DocsRead(e)
    })?;

    let document = serde_json::from_str(&raw).map_err(|e| {
        tracing::error!("Error parsing documentation file {}: {}", path, e);
        AppError::DocsParse(e)
    })?;

    Ok(Json(document))
}
