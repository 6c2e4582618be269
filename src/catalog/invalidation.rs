//! Write-path invalidation of the property snapshot
//!
//! [`InvalidatingStore`] wraps any [`PropertyStore`] so that every successful
//! create, update or delete evicts `all_properties` before returning.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::cache::CacheClient;
use crate::catalog::ALL_PROPERTIES_KEY;
use crate::error::Result;
use crate::models::{NewProperty, Property, PropertyChanges};
use crate::store::PropertyStore;

// == Change Kind ==
/// Kind of write that touched a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Updated,
    Deleted,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self {
            ChangeKind::Created => "created",
            ChangeKind::Updated => "updated",
            ChangeKind::Deleted => "deleted",
        };
        f.write_str(action)
    }
}

// == Invalidation Hook ==
/// Evicts the collection snapshot. The key is collection-wide, so which
/// record changed does not matter.
#[derive(Clone)]
pub struct InvalidationHook {
    cache: Arc<dyn CacheClient>,
}

impl InvalidationHook {
    pub fn new(cache: Arc<dyn CacheClient>) -> Self {
        Self { cache }
    }

    /// Deletes `all_properties`. Never fails: a cache error is logged and the
    /// snapshot is left to expire on its TTL.
    pub async fn property_changed(&self, property: &Property, kind: ChangeKind) {
        match self.cache.delete(ALL_PROPERTIES_KEY).await {
            Ok(_) => info!(
                "Property {} was {}. Cache invalidated for key: {}",
                property.title, kind, ALL_PROPERTIES_KEY
            ),
            Err(e) => error!(
                "Property {} was {} but invalidating {} failed: {}",
                property.title, kind, ALL_PROPERTIES_KEY, e
            ),
        }
    }
}

// == Invalidating Store ==
/// Store wrapper that runs the [`InvalidationHook`] after each successful write.
pub struct InvalidatingStore {
    inner: Arc<dyn PropertyStore>,
    hook: InvalidationHook,
}

impl InvalidatingStore {
    pub fn new(inner: Arc<dyn PropertyStore>, hook: InvalidationHook) -> Self {
        Self { inner, hook }
    }
}

#[async_trait]
impl PropertyStore for InvalidatingStore {
    async fn get_all(&self) -> Result<Vec<Property>> {
        self.inner.get_all().await
    }

    async fn get(&self, id: i64) -> Result<Property> {
        self.inner.get(id).await
    }

    async fn create(&self, new: NewProperty) -> Result<Property> {
        let property = self.inner.create(new).await?;
        self.hook.property_changed(&property, ChangeKind::Created).await;
        Ok(property)
    }

    async fn update(&self, id: i64, changes: PropertyChanges) -> Result<Property> {
        let property = self.inner.update(id, changes).await?;
        self.hook.property_changed(&property, ChangeKind::Updated).await;
        Ok(property)
    }

    async fn delete(&self, id: i64) -> Result<Property> {
        let property = self.inner.delete(id).await?;
        self.hook.property_changed(&property, ChangeKind::Deleted).await;
        Ok(property)
    }
}
