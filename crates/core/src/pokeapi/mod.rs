//! PokeAPI integration - the upstream creature catalog.
//!
//! This module provides the HTTP client for the external catalog and the
//! normalization layer that flattens its nested payloads into canonical
//! records.

mod client;
mod normalize;
mod raw;
mod types;

pub use client::{PokeApiClient, PokeApiConfig};
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when fetching from the upstream catalog.
///
/// Callers treat every variant uniformly as "source unavailable"; the
/// distinction exists for logging and for the controller layer's status
/// mapping.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request did not complete within the configured timeout.
    #[error("upstream request timed out")]
    Timeout,

    /// Upstream answered with a non-success status code.
    #[error("upstream returned HTTP {0}")]
    HttpStatus(u16),

    /// Transport-level failure (DNS, connect, TLS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The payload did not match the expected schema.
    #[error("malformed upstream payload: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_decode() {
            FetchError::Malformed(e.to_string())
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

/// Trait for upstream catalog clients.
///
/// Implemented by [`PokeApiClient`] and by the mock in `testing`, so the
/// service layer and the server tests can swap the upstream out.
#[async_trait]
pub trait PokeApi: Send + Sync {
    /// Fetch one page of the pokemon list.
    ///
    /// `offset`/`limit` are passed through to the upstream as-is.
    async fn fetch_list(&self, offset: u32, limit: u32) -> Result<PokemonPage, FetchError>;

    /// Fetch the full detail for a pokemon by name or numeric id.
    async fn fetch_detail(&self, identifier: &str) -> Result<PokemonDetail, FetchError>;
}
