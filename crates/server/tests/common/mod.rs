//! Common test utilities for in-process API testing.
//!
//! The fixture wires the real router, service, cache and a SQLite store in
//! a temp directory against a mock upstream catalog, so requests exercise
//! the full stack without network access.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use pokedex_core::{
    Config, FavoritesStore, MemoryCache, PokeApi, PokedexService, SqliteFavorites,
    testing::MockPokeApi,
};

/// Re-export fixtures for test convenience
pub use pokedex_core::testing::fixtures;

/// In-process test fixture.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_health() {
///     let fixture = TestFixture::new();
///     let response = fixture.get("/api/v1/health").await;
///     assert_eq!(response.status, StatusCode::OK);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock upstream catalog, configure pages and details here
    pub pokeapi: Arc<MockPokeApi>,
    /// Temporary directory holding the test database
    pub temp_dir: TempDir,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    pub fn new() -> Self {
        Self::with_cache_ttl(Duration::from_secs(60))
    }

    pub fn with_cache_ttl(cache_ttl: Duration) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");

        let pokeapi = Arc::new(MockPokeApi::new());

        let favorites: Arc<dyn FavoritesStore> = Arc::new(
            SqliteFavorites::new(&db_path).expect("Failed to create favorites store"),
        );

        let service = Arc::new(PokedexService::new(
            Arc::clone(&pokeapi) as Arc<dyn PokeApi>,
            Arc::new(MemoryCache::new()),
            favorites,
            cache_ttl,
        ));

        let state = Arc::new(pokedex_server::state::AppState::new(
            Config::default(),
            service,
        ));

        let router = pokedex_server::api::create_router(state);

        Self {
            router,
            pokeapi,
            temp_dir,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path).await
    }

    /// Send a POST request with an empty body.
    pub async fn post(&self, path: &str) -> TestResponse {
        self.request("POST", path).await
    }

    async fn request(&self, method: &str, path: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            serde_json::to_string_pretty(&$response.body).unwrap_or_default()
        );
    };
}
