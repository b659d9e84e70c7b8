pub mod cache;
pub mod config;
pub mod favorites;
pub mod metrics;
pub mod pokeapi;
pub mod service;
pub mod testing;

pub use cache::MemoryCache;
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, DatabaseConfig,
    ServerConfig,
};
pub use favorites::{FavoriteRecord, FavoritesError, FavoritesStore, SqliteFavorites, ToggleOutcome};
pub use pokeapi::{
    FetchError, PokeApi, PokeApiClient, PokeApiConfig, PokemonAbility, PokemonDetail, PokemonPage,
    PokemonStat, PokemonSummary,
};
pub use service::{PokedexService, ServiceError};
