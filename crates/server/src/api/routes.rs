use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{favorites, handlers, pokemon};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health, config and metrics
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        .route("/metrics", get(handlers::metrics))
        // Upstream catalog (cached)
        .route("/pokemon", get(pokemon::list_pokemons))
        .route("/pokemon/{identifier}", get(pokemon::get_pokemon))
        .route(
            "/pokemon/{identifier}/favorite",
            post(pokemon::toggle_favorite),
        )
        // Favorites derived views
        .route("/favorites", get(favorites::list_favorites))
        .route("/favorites/search", get(favorites::search_favorites))
        .route("/favorites/abilities", get(favorites::distinct_abilities))
        .route("/favorites/by-ability/{ability}", get(favorites::by_ability))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
}
