//! Raw PokeAPI response schema (private).
//!
//! Strict serde types with explicit optional fields - a payload that does
//! not match this shape fails deserialization instead of silently yielding
//! partial records.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct RawListPayload {
    pub count: u32,
    pub results: Vec<RawListEntry>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawListEntry {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawDetailPayload {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub types: Vec<RawTypeSlot>,
    pub abilities: Vec<RawAbilitySlot>,
    pub stats: Vec<RawStatSlot>,
    pub sprites: RawSprites,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawTypeSlot {
    #[serde(rename = "type")]
    pub type_: RawNamed,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawAbilitySlot {
    pub ability: RawNamed,
    pub is_hidden: bool,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawStatSlot {
    pub base_stat: i32,
    pub stat: RawNamed,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawSprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawNamed {
    pub name: String,
}
