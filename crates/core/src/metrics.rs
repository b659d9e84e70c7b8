//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Response cache (hits, misses)
//! - Upstream catalog (request counts, durations)
//! - Favorites (toggle counts)

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts};

/// Cache lookups total by result.
pub static CACHE_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("pokedex_cache_requests_total", "Total cache lookups"),
        &["result"], // "hit", "miss"
    )
    .unwrap()
});

/// Upstream catalog requests total by operation and outcome.
pub static UPSTREAM_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "pokedex_upstream_requests_total",
            "Total upstream catalog requests",
        ),
        &["operation", "status"], // operation: "list", "detail"; status: "success", "error"
    )
    .unwrap()
});

/// Upstream catalog request duration in seconds.
pub static UPSTREAM_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "pokedex_upstream_duration_seconds",
            "Duration of upstream catalog requests",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["operation"],
    )
    .unwrap()
});

/// Favorite toggles total by action.
pub static FAVORITE_TOGGLES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("pokedex_favorite_toggles_total", "Total favorite toggles"),
        &["action"], // "added", "removed"
    )
    .unwrap()
});

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(CACHE_REQUESTS.clone()),
        Box::new(UPSTREAM_REQUESTS.clone()),
        Box::new(UPSTREAM_DURATION.clone()),
        Box::new(FAVORITE_TOGGLES.clone()),
    ]
}
