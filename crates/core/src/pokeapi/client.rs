//! PokeAPI HTTP client.
//!
//! PokeAPI is free and keyless; the only fairness requirement is caching,
//! which the service layer provides on top of this client.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::normalize::{normalize_detail, normalize_list};
use super::raw::{RawDetailPayload, RawListPayload};
use super::types::{PokemonDetail, PokemonPage};
use super::{FetchError, PokeApi};
use crate::metrics;

fn default_timeout() -> u64 {
    30
}

fn default_cache_ttl() -> u64 {
    60
}

fn default_base_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

/// PokeAPI client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokeApiConfig {
    /// Base URL (default: https://pokeapi.co/api/v2).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// How long cached upstream responses stay fresh (default: 60).
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
}

impl Default for PokeApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            cache_ttl_secs: default_cache_ttl(),
        }
    }
}

/// PokeAPI HTTP client.
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    /// Create a new client with a bounded request timeout.
    pub fn new(config: &PokeApiConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        operation: &str,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let started = Instant::now();
        let result = self.request(url, query).await;
        metrics::UPSTREAM_DURATION
            .with_label_values(&[operation])
            .observe(started.elapsed().as_secs_f64());
        metrics::UPSTREAM_REQUESTS
            .with_label_values(&[operation, if result.is_ok() { "success" } else { "error" }])
            .inc();
        result
    }

    async fn request<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl PokeApi for PokeApiClient {
    async fn fetch_list(&self, offset: u32, limit: u32) -> Result<PokemonPage, FetchError> {
        let url = format!("{}/pokemon", self.base_url);

        debug!("PokeAPI list: offset={}, limit={}", offset, limit);

        let raw: RawListPayload = self
            .get_json(
                "list",
                &url,
                &[
                    ("offset", offset.to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;

        Ok(normalize_list(raw))
    }

    async fn fetch_detail(&self, identifier: &str) -> Result<PokemonDetail, FetchError> {
        let url = format!("{}/pokemon/{}", self.base_url, urlencoding::encode(identifier));

        debug!("PokeAPI detail: identifier='{}'", identifier);

        let raw: RawDetailPayload = self.get_json("detail", &url, &[]).await?;

        Ok(normalize_detail(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config: PokeApiConfig = toml::from_str("").unwrap();
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.cache_ttl_secs, 60);
    }

    #[test]
    fn test_client_strips_trailing_slash() {
        let client = PokeApiClient::new(&PokeApiConfig {
            base_url: "https://pokeapi.co/api/v2/".to_string(),
            ..PokeApiConfig::default()
        })
        .unwrap();
        assert_eq!(client.base_url, "https://pokeapi.co/api/v2");
    }
}
