use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Fixed caller-facing message for a lookup that matched no record.
pub const PLANET_NOT_FOUND_MESSAGE: &str = "Planet not found. Select a number from 0 - 9.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("planet not found")]
    PlanetNotFound,

    #[error("record store error: {0}")]
    Store(#[from] mongodb::error::Error),

    #[error("error reading documentation file: {0}")]
    DocsRead(std::io::Error),

    #[error("error parsing documentation file: {0}")]
    DocsParse(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::PlanetNotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": PLANET_NOT_FOUND_MESSAGE })),
            )
                .into_response(),
            // Driver detail is logged at the call site and stays out of the body.
            AppError::Store(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Error fetching planet data" })),
            )
                .into_response(),
            AppError::DocsRead(_) | AppError::DocsParse(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Error reading file").into_response()
            }
            AppError::Config(_) | AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
                .into_response(),
        }
    }
}
