//! In-memory TTL cache with per-key single-flight deduplication.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::metrics;

struct CacheEntry {
    /// Opaque serialized value (JSON).
    value: String,
    expires_at: Instant,
}

/// In-memory response cache.
///
/// Values are stored serialized so the cache stays type-agnostic; an entry
/// that fails to deserialize is evicted and treated as a miss. Entries are
/// removed only by expiry.
///
/// Concurrent misses on the same key are collapsed into one computation:
/// callers serialize on a per-key async lock and re-check the cache after
/// acquiring it. The lock registry grows with the key space, which is
/// bounded by the upstream catalog.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    in_flight: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, or run `compute` and store its
    /// result for `ttl`.
    ///
    /// A failing `compute` is propagated and never occupies a TTL slot.
    pub async fn get_or_compute<V, E, F, Fut>(
        &self,
        key: &str,
        ttl: Duration,
        compute: F,
    ) -> Result<V, E>
    where
        V: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.lookup(key) {
            metrics::CACHE_REQUESTS.with_label_values(&["hit"]).inc();
            return Ok(value);
        }

        let flight = self.flight_lock(key);
        let _guard = flight.lock().await;

        // Another caller may have populated the entry while we waited.
        if let Some(value) = self.lookup(key) {
            metrics::CACHE_REQUESTS.with_label_values(&["hit"]).inc();
            return Ok(value);
        }

        metrics::CACHE_REQUESTS.with_label_values(&["miss"]).inc();
        debug!("cache miss: key='{}'", key);

        let value = compute().await?;
        self.store(key, &value, ttl);
        Ok(value)
    }

    /// Whether a live entry exists for `key`. Does not count as a hit.
    pub fn contains(&self, key: &str) -> bool {
        let entries = self.entries.lock().unwrap();
        entries
            .get(key)
            .is_some_and(|entry| entry.expires_at > Instant::now())
    }

    fn lookup<V: DeserializeOwned>(&self, key: &str) -> Option<V> {
        let mut entries = self.entries.lock().unwrap();
        let entry = entries.get(key)?;

        if entry.expires_at <= Instant::now() {
            entries.remove(key);
            return None;
        }

        match serde_json::from_str(&entry.value) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("evicting undecodable cache entry '{}': {}", key, e);
                entries.remove(key);
                None
            }
        }
    }

    fn store<V: Serialize>(&self, key: &str, value: &V, ttl: Duration) {
        match serde_json::to_string(value) {
            Ok(serialized) => {
                let mut entries = self.entries.lock().unwrap();
                entries.insert(
                    key.to_string(),
                    CacheEntry {
                        value: serialized,
                        expires_at: Instant::now() + ttl,
                    },
                );
            }
            Err(e) => warn!("not caching unserializable value for '{}': {}", key, e),
        }
    }

    fn flight_lock(&self, key: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut in_flight = self.in_flight.lock().unwrap();
        in_flight
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone()
    }
}
