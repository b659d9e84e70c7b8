use std::sync::Arc;
use pokedex_core::{Config, PokedexService};

/// Shared application state
///
/// Owns the service by reference; constructed once in `main` (or the test
/// fixture) and shared across handlers.
pub struct AppState {
    config: Config,
    service: Arc<PokedexService>,
}

impl AppState {
    pub fn new(config: Config, service: Arc<PokedexService>) -> Self {
        Self { config, service }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn service(&self) -> &PokedexService {
        &self.service
    }
}
