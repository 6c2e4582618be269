//! Cache Entry Module
//!
//! A stored value with its absolute expiry time.

// == Cache Entry ==
/// A single cache entry. `expires_at` is in Unix milliseconds.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub value: String,
    pub expires_at: Option<u64>,
}

impl CacheEntry {
    /// Creates an entry stamped at `now_ms`. A TTL of zero seconds means no expiry.
    pub fn new(value: String, ttl_seconds: u64, now_ms: u64) -> Self {
        let expires_at = (ttl_seconds > 0)
            .then(|| now_ms.saturating_add(ttl_seconds.saturating_mul(1000)));
        Self { value, expires_at }
    }

    // == Is Expired ==
    /// An entry is expired once `now_ms` reaches its expiry time.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        match self.expires_at {
            Some(expires) => now_ms >= expires,
            None => false,
        }
    }
}
