//! TTL Cleanup Task
//!
//! Background task that periodically purges expired entries from in-process caches.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::MemoryCache;

/// Spawns a background task that purges expired entries from `caches` every
/// `cleanup_interval_secs` seconds.
///
/// Expired entries are already invisible to readers; this only reclaims memory.
/// The returned handle is aborted during graceful shutdown.
pub fn spawn_cleanup_task(
    caches: Vec<Arc<MemoryCache>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task for {} cache(s) every {} seconds",
            caches.len(),
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let mut removed = 0;
            for cache in &caches {
                removed += cache.cleanup_expired().await;
            }

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}
