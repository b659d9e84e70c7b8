//! Normalization of raw upstream payloads into canonical records.
//!
//! Pure projections: wrapper nesting is stripped, upstream order is
//! preserved, nothing is re-sorted.

use super::raw::{RawDetailPayload, RawListPayload};
use super::types::{PokemonAbility, PokemonDetail, PokemonPage, PokemonStat, PokemonSummary};

/// Project a raw list payload down to name/url pairs.
pub(super) fn normalize_list(raw: RawListPayload) -> PokemonPage {
    PokemonPage {
        count: raw.count,
        results: raw
            .results
            .into_iter()
            .map(|e| PokemonSummary {
                name: e.name,
                url: e.url,
            })
            .collect(),
    }
}

/// Flatten a raw detail payload into the canonical record.
pub(super) fn normalize_detail(raw: RawDetailPayload) -> PokemonDetail {
    PokemonDetail {
        id: raw.id,
        name: raw.name,
        types: raw.types.into_iter().map(|t| t.type_.name).collect(),
        abilities: raw
            .abilities
            .into_iter()
            .map(|a| PokemonAbility {
                name: a.ability.name,
                is_hidden: a.is_hidden,
            })
            .collect(),
        stats: raw
            .stats
            .into_iter()
            .map(|s| PokemonStat {
                name: s.stat.name,
                value: s.base_stat,
            })
            .collect(),
        sprite: raw.sprites.front_default,
        height: raw.height,
        weight: raw.weight,
    }
}
