//! The service layer wiring cache, upstream client and favorites together.
//!
//! Control flow: controller -> cache.get_or_compute(key, ttl, fetch) ->
//! canonical record. Toggling reads a fresh detail through the same cached
//! path, then mutates the favorites store.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::cache::MemoryCache;
use crate::favorites::{FavoriteRecord, FavoritesError, FavoritesStore, ToggleOutcome};
use crate::metrics;
use crate::pokeapi::{FetchError, PokeApi, PokemonDetail, PokemonPage};

/// Errors surfaced to the controller layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The upstream catalog could not be reached or answered abnormally.
    /// The controller chooses the externally visible status.
    #[error("upstream catalog unavailable: {0}")]
    Unavailable(#[from] FetchError),

    /// Persistence failure; fatal for the current request, never retried.
    #[error(transparent)]
    Favorites(#[from] FavoritesError),
}

/// Pokédex service: cache-aside lookups against the upstream catalog plus
/// the persisted favorites subset.
///
/// Constructed once in `main` and shared by reference; it owns no global
/// state of its own.
pub struct PokedexService {
    api: Arc<dyn PokeApi>,
    cache: Arc<MemoryCache>,
    favorites: Arc<dyn FavoritesStore>,
    cache_ttl: Duration,
}

impl PokedexService {
    pub fn new(
        api: Arc<dyn PokeApi>,
        cache: Arc<MemoryCache>,
        favorites: Arc<dyn FavoritesStore>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            api,
            cache,
            favorites,
            cache_ttl,
        }
    }

    /// One page of the pokemon list. `page` is 1-based; parameter
    /// validation is the controller's job.
    pub async fn get_pokemons(&self, page: u32, limit: u32) -> Result<PokemonPage, ServiceError> {
        let offset = (page - 1) * limit;
        // List keys and detail keys live in disjoint namespaces; every
        // parameter affecting the result is part of the key.
        let key = format!("pokemon:list:{}:{}", page, limit);

        let page = self
            .cache
            .get_or_compute(&key, self.cache_ttl, || {
                self.api.fetch_list(offset, limit)
            })
            .await?;

        Ok(page)
    }

    /// Full detail for a pokemon by name or numeric id.
    pub async fn get_pokemon_detail(
        &self,
        identifier: &str,
    ) -> Result<PokemonDetail, ServiceError> {
        let key = format!("pokemon:detail:{}", identifier);

        let detail = self
            .cache
            .get_or_compute(&key, self.cache_ttl, || self.api.fetch_detail(identifier))
            .await?;

        Ok(detail)
    }

    /// Toggle the favorite state for a pokemon.
    ///
    /// The detail handed to the store always comes from a fresh lookup
    /// through the cached path; a failed lookup aborts the toggle without
    /// touching the store.
    pub async fn toggle_favorite(
        &self,
        identifier: &str,
    ) -> Result<(PokemonDetail, ToggleOutcome), ServiceError> {
        let detail = self.get_pokemon_detail(identifier).await?;
        let outcome = self.favorites.toggle(&detail)?;

        metrics::FAVORITE_TOGGLES
            .with_label_values(&[if outcome.added { "added" } else { "removed" }])
            .inc();
        debug!(
            "toggled favorite: id={}, name={}, added={}",
            detail.id, detail.name, outcome.added
        );

        Ok((detail, outcome))
    }

    /// Whether a favorite exists for the given upstream id.
    pub fn is_favorite(&self, pokemon_id: u32) -> Result<bool, ServiceError> {
        Ok(self.favorites.is_favorite(pokemon_id)?)
    }

    /// All favorite records, order unspecified.
    pub fn list_favorites(&self) -> Result<Vec<FavoriteRecord>, ServiceError> {
        Ok(self.favorites.list_all()?)
    }

    /// Favorites whose name contains `query` (case-insensitive); an empty
    /// query returns every record.
    pub fn search_favorites(&self, query: &str) -> Result<Vec<FavoriteRecord>, ServiceError> {
        Ok(self.favorites.search_by_name(query)?)
    }

    /// Favorites with an ability named exactly `ability`.
    pub fn favorites_by_ability(
        &self,
        ability: &str,
    ) -> Result<Vec<FavoriteRecord>, ServiceError> {
        Ok(self.favorites.filter_by_ability(ability)?)
    }

    /// Sorted, deduplicated ability names across all favorites.
    pub fn distinct_abilities(&self) -> Result<Vec<String>, ServiceError> {
        Ok(self.favorites.distinct_abilities()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::SqliteFavorites;
    use crate::testing::{fixtures, MockPokeApi};

    fn create_service(api: Arc<MockPokeApi>) -> PokedexService {
        PokedexService::new(
            api,
            Arc::new(MemoryCache::new()),
            Arc::new(SqliteFavorites::in_memory().unwrap()),
            Duration::from_secs(60),
        )
    }

    #[tokio::test]
    async fn test_list_is_cached_within_ttl() {
        let api = Arc::new(MockPokeApi::new());
        api.set_list(fixtures::first_page());
        let service = create_service(Arc::clone(&api));

        let first = service.get_pokemons(1, 20).await.unwrap();
        let second = service.get_pokemons(1, 20).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(api.list_calls(), 1);
    }

    #[tokio::test]
    async fn test_list_pagination_maps_page_to_offset() {
        let api = Arc::new(MockPokeApi::new());
        api.set_list(fixtures::first_page());
        let service = create_service(Arc::clone(&api));

        service.get_pokemons(3, 20).await.unwrap();
        assert_eq!(api.last_list_params(), Some((40, 20)));
    }

    #[tokio::test]
    async fn test_different_pages_are_cached_separately() {
        let api = Arc::new(MockPokeApi::new());
        api.set_list(fixtures::first_page());
        let service = create_service(Arc::clone(&api));

        service.get_pokemons(1, 20).await.unwrap();
        service.get_pokemons(2, 20).await.unwrap();
        service.get_pokemons(1, 10).await.unwrap();

        assert_eq!(api.list_calls(), 3);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_not_cached_and_retries() {
        let api = Arc::new(MockPokeApi::new());
        api.set_list(fixtures::first_page());
        api.fail_next_list();
        let service = create_service(Arc::clone(&api));

        let failed = service.get_pokemons(1, 20).await;
        assert!(matches!(failed, Err(ServiceError::Unavailable(_))));

        // The failure occupied no TTL slot; the next call goes upstream.
        let ok = service.get_pokemons(1, 20).await;
        assert!(ok.is_ok());
        assert_eq!(api.list_calls(), 2);
    }

    #[tokio::test]
    async fn test_detail_is_cached_within_ttl() {
        let api = Arc::new(MockPokeApi::new());
        api.add_detail(fixtures::bulbasaur());
        let service = create_service(Arc::clone(&api));

        let first = service.get_pokemon_detail("bulbasaur").await.unwrap();
        let second = service.get_pokemon_detail("bulbasaur").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(api.detail_calls(), 1);
    }

    #[tokio::test]
    async fn test_list_and_detail_keys_do_not_collide() {
        let api = Arc::new(MockPokeApi::new());
        api.set_list(fixtures::first_page());
        api.add_detail(fixtures::bulbasaur());
        let service = create_service(Arc::clone(&api));

        service.get_pokemons(1, 1).await.unwrap();
        service.get_pokemon_detail("1").await.unwrap();

        assert_eq!(api.list_calls(), 1);
        assert_eq!(api.detail_calls(), 1);
    }

    #[tokio::test]
    async fn test_toggle_favorite_is_self_inverting() {
        let api = Arc::new(MockPokeApi::new());
        api.add_detail(fixtures::bulbasaur());
        let service = create_service(Arc::clone(&api));

        let (detail, outcome) = service.toggle_favorite("bulbasaur").await.unwrap();
        assert!(outcome.added);
        assert!(service.is_favorite(detail.id).unwrap());

        let (_, outcome) = service.toggle_favorite("bulbasaur").await.unwrap();
        assert!(!outcome.added);
        assert!(!service.is_favorite(detail.id).unwrap());
        assert!(service.list_favorites().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_aborts_when_upstream_unavailable() {
        let api = Arc::new(MockPokeApi::new());
        let service = create_service(Arc::clone(&api));

        // Unknown identifier: the mock reports HTTP 404.
        let result = service.toggle_favorite("missingno").await;
        assert!(matches!(result, Err(ServiceError::Unavailable(_))));
        assert!(service.list_favorites().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_favorites_views_pass_through() {
        let api = Arc::new(MockPokeApi::new());
        api.add_detail(fixtures::charmander());
        api.add_detail(fixtures::charizard());
        let service = create_service(Arc::clone(&api));

        service.toggle_favorite("charmander").await.unwrap();
        service.toggle_favorite("charizard").await.unwrap();

        assert_eq!(service.search_favorites("char").unwrap().len(), 2);
        assert_eq!(service.favorites_by_ability("blaze").unwrap().len(), 2);
        assert_eq!(
            service.distinct_abilities().unwrap(),
            vec!["blaze", "solar-power"]
        );
    }
}
