//! Cache hit/miss reporting

use std::sync::Arc;

use tracing::{error, info};

use crate::cache::CacheClient;
use crate::models::CacheMetrics;

// == Metrics Reporter ==
/// Reads the cache backend's aggregate counters and derives the hit ratio.
#[derive(Clone)]
pub struct MetricsReporter {
    cache: Arc<dyn CacheClient>,
}

impl MetricsReporter {
    pub fn new(cache: Arc<dyn CacheClient>) -> Self {
        Self { cache }
    }

    // == Report ==
    /// Current metrics. On a cache failure returns zeroed metrics with `error` set.
    pub async fn report(&self) -> CacheMetrics {
        match self.cache.aggregate_stats().await {
            Ok(stats) => {
                let metrics = CacheMetrics::from_counters(stats.hits, stats.misses);
                info!(
                    "Cache metrics: hits={} misses={} hit_ratio={}%",
                    metrics.keyspace_hits, metrics.keyspace_misses, metrics.hit_ratio
                );
                metrics
            }
            Err(e) => {
                error!("Error retrieving cache metrics: {}", e);
                CacheMetrics::degraded(e.to_string())
            }
        }
    }
}
