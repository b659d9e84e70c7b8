//! Pokemon list/detail handlers and the favorite toggle.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use pokedex_core::{PokemonDetail, PokemonPage};

use super::handlers::{bad_request, service_error, ErrorResponse};
use crate::state::AppState;

const MAX_LIMIT: u32 = 100;

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    20
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Detail payload annotated with the local favorite state.
#[derive(Debug, Serialize)]
pub struct DetailResponse {
    #[serde(flatten)]
    pub pokemon: PokemonDetail,
    pub is_favorite: bool,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub pokemon_id: u32,
    pub name: String,
    pub added: bool,
}

/// GET /api/v1/pokemon?page=&limit=
pub async fn list_pokemons(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<PokemonPage>, (StatusCode, Json<ErrorResponse>)> {
    if params.page < 1 {
        return Err(bad_request("page must be >= 1"));
    }
    if params.limit < 1 || params.limit > MAX_LIMIT {
        return Err(bad_request(format!("limit must be in [1, {}]", MAX_LIMIT)));
    }

    let page = state
        .service()
        .get_pokemons(params.page, params.limit)
        .await
        .map_err(service_error)?;

    Ok(Json(page))
}

/// GET /api/v1/pokemon/{identifier}
pub async fn get_pokemon(
    State(state): State<Arc<AppState>>,
    Path(identifier): Path<String>,
) -> Result<Json<DetailResponse>, (StatusCode, Json<ErrorResponse>)> {
    let pokemon = state
        .service()
        .get_pokemon_detail(&identifier)
        .await
        .map_err(service_error)?;

    let is_favorite = state
        .service()
        .is_favorite(pokemon.id)
        .map_err(service_error)?;

    Ok(Json(DetailResponse {
        pokemon,
        is_favorite,
    }))
}

/// POST /api/v1/pokemon/{identifier}/favorite
///
/// Toggles the favorite state: adds when absent, removes when present.
pub async fn toggle_favorite(
    State(state): State<Arc<AppState>>,
    Path(identifier): Path<String>,
) -> Result<Json<ToggleResponse>, (StatusCode, Json<ErrorResponse>)> {
    let (pokemon, outcome) = state
        .service()
        .toggle_favorite(&identifier)
        .await
        .map_err(service_error)?;

    Ok(Json(ToggleResponse {
        pokemon_id: pokemon.id,
        name: pokemon.name,
        added: outcome.added,
    }))
}
