//! In-process cache backend
//!
//! HashMap storage with TTL expiry and Redis-style keyspace counters.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{CacheClient, CacheEntry, CacheStats, Clock, SystemClock};
use crate::error::Result;

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, CacheEntry>,
    stats: CacheStats,
}

// == Memory Cache ==
/// Thread-safe in-memory cache. Expired entries count as misses and are
/// dropped lazily on access or by [`MemoryCache::cleanup_expired`].
pub struct MemoryCache {
    inner: RwLock<Inner>,
    clock: Arc<dyn Clock>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates a cache whose expiry decisions use `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            clock,
        }
    }

    // == Cleanup Expired ==
    /// Removes all expired entries and returns how many were removed.
    pub async fn cleanup_expired(&self) -> usize {
        let now = self.clock.now_ms();
        let mut inner = self.inner.write().await;
        let before = inner.entries.len();
        inner.entries.retain(|_, entry| !entry.is_expired(now));
        before - inner.entries.len()
    }

    /// Number of stored entries, expired ones included until cleaned up.
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheClient for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let now = self.clock.now_ms();
        let mut guard = self.inner.write().await;
        let inner = &mut *guard;

        let live = match inner.entries.get(key).map(|entry| entry.is_expired(now)) {
            Some(false) => inner.entries.get(key).map(|entry| entry.value.clone()),
            Some(true) => {
                inner.entries.remove(key);
                None
            }
            None => None,
        };

        match live {
            Some(_) => inner.stats.record_hit(),
            None => inner.stats.record_miss(),
        }
        Ok(live)
    }

    async fn set(&self, key: &str, value: String, ttl_seconds: u64) -> Result<()> {
        let entry = CacheEntry::new(value, ttl_seconds, self.clock.now_ms());
        self.inner.write().await.entries.insert(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.inner.write().await.entries.remove(key).is_some())
    }

    async fn aggregate_stats(&self) -> Result<CacheStats> {
        Ok(self.inner.read().await.stats)
    }
}
