//! Redis cache backend
//!
//! Keyspace counters come from `INFO stats`, so they are server-wide rather
//! than per-key.

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands};
use tracing::{debug, info};

use crate::cache::{CacheClient, CacheStats};
use crate::error::{CatalogError, Result};

/// Redis client sharing one multiplexed connection across clones.
#[derive(Clone)]
pub struct RedisCache {
    manager: ConnectionManager,
}

impl RedisCache {
    /// Connects to `url` and verifies the connection with a PING.
    pub async fn connect(url: &str) -> Result<Self> {
        info!("Connecting to Redis at {}", url);

        let client = redis::Client::open(url)?;
        let manager = ConnectionManager::new(client).await?;

        let mut conn = manager.clone();
        redis::cmd("PING").query_async::<_, String>(&mut conn).await?;

        info!("Redis connection established");
        Ok(Self { manager })
    }
}

#[async_trait]
impl CacheClient for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn.get(key).await?;
        debug!("Redis GET {} -> {}", key, if value.is_some() { "hit" } else { "miss" });
        Ok(value)
    }

    async fn set(&self, key: &str, value: String, ttl_seconds: u64) -> Result<()> {
        let mut conn = self.manager.clone();
        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(value);
        if ttl_seconds > 0 {
            cmd.arg("EX").arg(ttl_seconds);
        }
        cmd.query_async::<_, ()>(&mut conn).await?;
        debug!("Redis SET {} (ttl {}s)", key, ttl_seconds);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.manager.clone();
        let removed: i64 = conn.del(key).await?;
        Ok(removed > 0)
    }

    async fn aggregate_stats(&self) -> Result<CacheStats> {
        let mut conn = self.manager.clone();
        let info: String = redis::cmd("INFO").arg("stats").query_async(&mut conn).await?;
        parse_keyspace_stats(&info)
    }
}

/// Extracts `keyspace_hits` and `keyspace_misses` from an `INFO` reply.
pub fn parse_keyspace_stats(info: &str) -> Result<CacheStats> {
    let mut hits = None;
    let mut misses = None;

    for line in info.lines() {
        let Some((name, value)) = line.trim().split_once(':') else {
            continue;
        };
        let slot = match name {
            "keyspace_hits" => &mut hits,
            "keyspace_misses" => &mut misses,
            _ => continue,
        };
        *slot = Some(value.trim().parse::<u64>().map_err(|e| {
            CatalogError::CacheUnavailable(format!("Malformed {} in INFO reply: {}", name, e))
        })?);
    }

    Ok(CacheStats::new(hits.unwrap_or(0), misses.unwrap_or(0)))
}
