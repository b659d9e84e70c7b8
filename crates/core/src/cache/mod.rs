//! Response cache - a TTL-keyed cache-aside layer for upstream payloads.
//!
//! Callers compute on miss; failed computations are never stored, so the
//! next call retries unconditionally.

mod memory;

pub use memory::MemoryCache;
