//! Canonical types produced by the normalization layer.

use serde::{Deserialize, Serialize};

/// A single entry of the pokemon list.
///
/// Ephemeral - produced per list request, never persisted. The full detail
/// is fetched lazily only when explicitly requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSummary {
    /// Pokemon name (lowercase, as upstream reports it).
    pub name: String,
    /// Upstream detail URL.
    pub url: String,
}

/// One page of the pokemon list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonPage {
    /// Total number of pokemon in the upstream catalog.
    pub count: u32,
    /// Entries of this page, in upstream order.
    pub results: Vec<PokemonSummary>,
}

/// An ability entry of a pokemon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonAbility {
    /// Ability name (e.g. "overgrow").
    pub name: String,
    /// Whether this is a hidden ability.
    pub is_hidden: bool,
}

/// A base stat entry of a pokemon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStat {
    /// Stat name (e.g. "hp", "speed").
    pub name: String,
    /// Base value.
    pub value: i32,
}

/// Canonical flat pokemon record.
///
/// Computed fresh from the upstream payload within one cache window and
/// treated as immutable once produced. All sequences preserve upstream
/// order - order carries meaning (e.g. the primary ability precedes a
/// hidden one) and must not be re-sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonDetail {
    /// Upstream-stable numeric id.
    pub id: u32,
    /// Pokemon name.
    pub name: String,
    /// Type names, in upstream slot order.
    pub types: Vec<String>,
    /// Abilities, in upstream slot order.
    pub abilities: Vec<PokemonAbility>,
    /// Base stats, in upstream order.
    pub stats: Vec<PokemonStat>,
    /// "Front default" sprite URL, if upstream has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprite: Option<String>,
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
}
