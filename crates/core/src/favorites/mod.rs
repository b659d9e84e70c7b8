//! Favorites - a user-curated persisted subset of upstream records.
//!
//! One record per upstream pokemon id; a single toggle operation drives
//! both the add and the remove transition.

mod sqlite;

pub use sqlite::SqliteFavorites;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pokeapi::PokemonDetail;

/// Error type for favorites operations.
#[derive(Debug, Error)]
pub enum FavoritesError {
    /// Database error.
    #[error("database error: {0}")]
    Database(String),
}

/// A persisted favorite: the canonical record plus bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteRecord {
    /// The canonical record as it was at toggle time. Staleness against
    /// upstream is tolerated, not corrected.
    #[serde(flatten)]
    pub pokemon: PokemonDetail,
    /// Always true for a persisted record; kept explicit so API consumers
    /// can treat favorite and non-favorite payloads uniformly.
    pub is_favorite: bool,
    /// When the record was favorited.
    pub created_at: DateTime<Utc>,
}

/// Outcome of a toggle: whether the record was added or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleOutcome {
    pub added: bool,
}

/// Trait for favorites storage backends.
pub trait FavoritesStore: Send + Sync {
    /// Toggle the favorite state for the given detail.
    ///
    /// Deletes the record if one exists for the same upstream id
    /// (`added = false`), otherwise inserts a new one (`added = true`).
    /// Delete-or-insert runs atomically, so concurrent toggles on the same
    /// id cannot produce duplicates.
    fn toggle(&self, detail: &PokemonDetail) -> Result<ToggleOutcome, FavoritesError>;

    /// All favorite records. Order unspecified; callers must not rely on it.
    fn list_all(&self) -> Result<Vec<FavoriteRecord>, FavoritesError>;

    /// Case-insensitive substring match on name. An empty query is an
    /// explicit "no filter" and returns every record.
    fn search_by_name(&self, query: &str) -> Result<Vec<FavoriteRecord>, FavoritesError>;

    /// Records whose abilities contain an entry named exactly `ability`.
    fn filter_by_ability(&self, ability: &str) -> Result<Vec<FavoriteRecord>, FavoritesError>;

    /// Union of all ability names across favorites, deduplicated and sorted
    /// lexicographically ascending. Computed on demand, never materialized.
    fn distinct_abilities(&self) -> Result<Vec<String>, FavoritesError>;

    /// Whether a favorite exists for the given upstream id.
    fn is_favorite(&self, pokemon_id: u32) -> Result<bool, FavoritesError>;
}
