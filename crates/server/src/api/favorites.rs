//! Favorites derived-view handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use pokedex_core::FavoriteRecord;

use super::handlers::{service_error, ErrorResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Substring to match against names; empty or missing means no filter.
    #[serde(default)]
    pub q: String,
}

/// GET /api/v1/favorites
pub async fn list_favorites(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FavoriteRecord>>, (StatusCode, Json<ErrorResponse>)> {
    let records = state.service().list_favorites().map_err(service_error)?;
    Ok(Json(records))
}

/// GET /api/v1/favorites/search?q=
pub async fn search_favorites(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<FavoriteRecord>>, (StatusCode, Json<ErrorResponse>)> {
    let records = state
        .service()
        .search_favorites(&params.q)
        .map_err(service_error)?;
    Ok(Json(records))
}

/// GET /api/v1/favorites/by-ability/{ability}
pub async fn by_ability(
    State(state): State<Arc<AppState>>,
    Path(ability): Path<String>,
) -> Result<Json<Vec<FavoriteRecord>>, (StatusCode, Json<ErrorResponse>)> {
    let records = state
        .service()
        .favorites_by_ability(&ability)
        .map_err(service_error)?;
    Ok(Json(records))
}

/// GET /api/v1/favorites/abilities
pub async fn distinct_abilities(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, (StatusCode, Json<ErrorResponse>)> {
    let abilities = state
        .service()
        .distinct_abilities()
        .map_err(service_error)?;
    Ok(Json(abilities))
}
