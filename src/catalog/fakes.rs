//! Instrumented and failing collaborators for catalog tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::cache::{CacheClient, CacheStats, MemoryCache};
use crate::error::{CatalogError, Result};
use crate::models::{NewProperty, Property, PropertyChanges};
use crate::store::{MemoryStore, PropertyStore};

/// Store that counts full scans.
#[derive(Default)]
pub struct CountingStore {
    pub inner: MemoryStore,
    scans: AtomicUsize,
}

impl CountingStore {
    pub fn scans(&self) -> usize {
        self.scans.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PropertyStore for CountingStore {
    async fn get_all(&self) -> Result<Vec<Property>> {
        self.scans.fetch_add(1, Ordering::SeqCst);
        self.inner.get_all().await
    }

    async fn get(&self, id: i64) -> Result<Property> {
        self.inner.get(id).await
    }

    async fn create(&self, new: NewProperty) -> Result<Property> {
        self.inner.create(new).await
    }

    async fn update(&self, id: i64, changes: PropertyChanges) -> Result<Property> {
        self.inner.update(id, changes).await
    }

    async fn delete(&self, id: i64) -> Result<Property> {
        self.inner.delete(id).await
    }
}

/// Store whose every call fails.
pub struct DownStore;

fn store_down<T>() -> Result<T> {
    Err(CatalogError::StoreUnavailable("connection refused".to_string()))
}

#[async_trait]
impl PropertyStore for DownStore {
    async fn get_all(&self) -> Result<Vec<Property>> {
        store_down()
    }

    async fn get(&self, _id: i64) -> Result<Property> {
        store_down()
    }

    async fn create(&self, _new: NewProperty) -> Result<Property> {
        store_down()
    }

    async fn update(&self, _id: i64, _changes: PropertyChanges) -> Result<Property> {
        store_down()
    }

    async fn delete(&self, _id: i64) -> Result<Property> {
        store_down()
    }
}

/// Cache that counts writes and deletes on top of a [`MemoryCache`].
pub struct RecordingCache {
    pub inner: Arc<MemoryCache>,
    sets: AtomicUsize,
    deletes: AtomicUsize,
}

impl RecordingCache {
    pub fn new(inner: Arc<MemoryCache>) -> Self {
        Self {
            inner,
            sets: AtomicUsize::new(0),
            deletes: AtomicUsize::new(0),
        }
    }

    pub fn sets(&self) -> usize {
        self.sets.load(Ordering::SeqCst)
    }

    pub fn deletes(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CacheClient for RecordingCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String, ttl_seconds: u64) -> Result<()> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value, ttl_seconds).await
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(key).await
    }

    async fn aggregate_stats(&self) -> Result<CacheStats> {
        self.inner.aggregate_stats().await
    }
}

/// Cache whose every call fails.
pub struct DownCache;

fn cache_down<T>() -> Result<T> {
    Err(CatalogError::CacheUnavailable("Connection refused (os error 111)".to_string()))
}

#[async_trait]
impl CacheClient for DownCache {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        cache_down()
    }

    async fn set(&self, _key: &str, _value: String, _ttl_seconds: u64) -> Result<()> {
        cache_down()
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        cache_down()
    }

    async fn aggregate_stats(&self) -> Result<CacheStats> {
        cache_down()
    }
}
