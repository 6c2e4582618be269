//! Cache Module
//!
//! The [`CacheClient`] seam and its two backends: an in-process TTL map and
//! Redis.

mod clock;
mod entry;
mod memory;
mod redis_cache;
mod stats;

use async_trait::async_trait;

use crate::error::Result;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use memory::MemoryCache;
pub use redis_cache::{parse_keyspace_stats, RedisCache};
pub use stats::CacheStats;

/// Key-value cache with per-entry TTL and aggregate hit/miss counters.
///
/// Errors are reported as [`CatalogError::CacheUnavailable`](crate::error::CatalogError).
#[async_trait]
pub trait CacheClient: Send + Sync {
    /// Returns the live value under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value. A TTL of 0 never expires.
    async fn set(&self, key: &str, value: String, ttl_seconds: u64) -> Result<()>;

    /// Removes `key`. Returns whether an entry was present; absence is not an error.
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Cumulative lookup counters since the backend started.
    async fn aggregate_stats(&self) -> Result<CacheStats>;
}
