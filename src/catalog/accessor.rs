//! Cache-aside read path for the full property collection

use std::sync::Arc;

use tracing::{info, warn};

use crate::cache::CacheClient;
use crate::catalog::{ALL_PROPERTIES_KEY, ALL_PROPERTIES_TTL};
use crate::error::Result;
use crate::models::Property;
use crate::store::PropertyStore;

// == Property Catalog ==
/// Serves the property list from the cache, falling back to the store on a miss.
///
/// Concurrent misses are not coalesced: each one scans the store and rewrites
/// the snapshot, and the last write wins.
#[derive(Clone)]
pub struct PropertyCatalog {
    cache: Arc<dyn CacheClient>,
    store: Arc<dyn PropertyStore>,
    ttl_seconds: u64,
}

impl PropertyCatalog {
    // == Constructors ==
    pub fn new(cache: Arc<dyn CacheClient>, store: Arc<dyn PropertyStore>) -> Self {
        Self::with_ttl(cache, store, ALL_PROPERTIES_TTL)
    }

    pub fn with_ttl(
        cache: Arc<dyn CacheClient>,
        store: Arc<dyn PropertyStore>,
        ttl_seconds: u64,
    ) -> Self {
        Self {
            cache,
            store,
            ttl_seconds,
        }
    }

    // == Fetch All Properties ==
    /// Returns every property, newest first.
    ///
    /// A cache outage degrades to a direct store read. A store failure is
    /// returned as-is and leaves the cache untouched.
    pub async fn fetch_all_properties(&self) -> Result<Vec<Property>> {
        if let Some(properties) = self.cached_snapshot().await {
            info!("Retrieved {} properties from cache", properties.len());
            return Ok(properties);
        }

        info!("Properties not found in cache, fetching from store");
        let properties = self.store.get_all().await?;
        self.populate(&properties).await;
        Ok(properties)
    }

    // == Snapshot Read ==
    async fn cached_snapshot(&self) -> Option<Vec<Property>> {
        let raw = match self.cache.get(ALL_PROPERTIES_KEY).await {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Cache read failed, reading from store: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(properties) => Some(properties),
            Err(e) => {
                warn!("Discarding unreadable {} snapshot: {}", ALL_PROPERTIES_KEY, e);
                None
            }
        }
    }

    // == Snapshot Write ==
    async fn populate(&self, properties: &[Property]) {
        let snapshot = match serde_json::to_string(properties) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Could not encode {} snapshot: {}", ALL_PROPERTIES_KEY, e);
                return;
            }
        };

        match self
            .cache
            .set(ALL_PROPERTIES_KEY, snapshot, self.ttl_seconds)
            .await
        {
            Ok(()) => info!(
                "Cached {} properties for {} seconds",
                properties.len(),
                self.ttl_seconds
            ),
            Err(e) => warn!("Cache write failed, serving uncached result: {}", e),
        }
    }
}
