//! HTTP controller layer for the Pokédex service.
//!
//! Exposed as a library so integration tests can build the router
//! in-process with mock dependencies injected.

pub mod api;
pub mod metrics;
pub mod state;
