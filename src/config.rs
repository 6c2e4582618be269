//! Configuration Module
//!
//! Loads server configuration from environment variables.

use std::env;

use crate::catalog::ALL_PROPERTIES_TTL;

/// TTL in seconds for the transport-level response cache.
pub const RESPONSE_CACHE_TTL: u64 = 900;

/// Server configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Redis connection URL; the in-process cache is used when unset
    pub redis_url: Option<String>,
    /// TTL in seconds for the `all_properties` snapshot
    pub cache_ttl: u64,
    /// TTL in seconds for cached list responses, 0 disables the layer
    pub response_cache_ttl: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Insert the sample properties on startup
    pub seed_sample_data: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `REDIS_URL` - Redis URL (default: unset, in-process cache)
    /// - `PROPERTIES_CACHE_TTL` - snapshot TTL in seconds (default: 3600)
    /// - `RESPONSE_CACHE_TTL` - response cache TTL in seconds (default: 900)
    /// - `CLEANUP_INTERVAL` - cleanup frequency in seconds (default: 60)
    /// - `SEED_SAMPLE_DATA` - `true`/`1` to seed sample data (default: false)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            redis_url: env::var("REDIS_URL").ok().filter(|v| !v.trim().is_empty()),
            cache_ttl: parse_var("PROPERTIES_CACHE_TTL").unwrap_or(defaults.cache_ttl),
            response_cache_ttl: parse_var("RESPONSE_CACHE_TTL")
                .unwrap_or(defaults.response_cache_ttl),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            seed_sample_data: env::var("SEED_SAMPLE_DATA")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.seed_sample_data),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8000,
            redis_url: None,
            cache_ttl: ALL_PROPERTIES_TTL,
            response_cache_ttl: RESPONSE_CACHE_TTL,
            cleanup_interval: 60,
            seed_sample_data: false,
        }
    }
}
