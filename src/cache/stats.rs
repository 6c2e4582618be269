//! Cache Statistics Module
//!
//! Cumulative hit and miss counters, in the shape Redis reports them.

// == Cache Stats ==
/// Aggregate counters exposed by a cache backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups that found a live entry
    pub hits: u64,
    /// Lookups that found nothing or an expired entry
    pub misses: u64,
}

impl CacheStats {
    pub fn new(hits: u64, misses: u64) -> Self {
        Self { hits, misses }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn total_requests(&self) -> u64 {
        self.hits + self.misses
    }
}
