use crate::error::AppError;
use crate::models::Planet;
use crate::startup::AppState;
use axum::{extract::State, Json};
use mongodb::bson::{doc, to_bson};
use serde::Deserialize;

/// Lookup request body. The identifier is passed through to the store query
/// untouched; a missing field queries as null and a non-numeric value simply
/// matches no record.
#[derive(Debug, Deserialize)]
pub struct LookupRequest {
    #[serde(default)]
    pub id: serde_json::Value,
}

pub async fn lookup_planet(
    State(state): State<AppState>,
    Json(request): Json<LookupRequest>,
) -> Result<Json<Planet>, AppError> {
    let id = to_bson(&request.id)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode lookup id: {}", e)))?;

    let planet = state
        .db
        .planets()
        .find_one(doc! { "id": id }, None)
        .await
        .map_err(|e| {
            tracing::error!("Error fetching planet: {}", e);
            AppError::from(e)
        })?
        .ok_or(AppError::PlanetNotFound)?;

    Ok(Json(planet))
}
