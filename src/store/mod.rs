//! Store Module
//!
//! The [`PropertyStore`] seam over the authoritative property records.

mod memory;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{NewProperty, Property, PropertyChanges};

pub use memory::MemoryStore;

// == Property Store ==
/// CRUD access to persisted properties.
///
/// Failures to reach the backing store surface as
/// [`CatalogError::StoreUnavailable`](crate::error::CatalogError); unknown ids
/// as `NotFound`.
#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// Every property, newest `created_at` first.
    async fn get_all(&self) -> Result<Vec<Property>>;

    async fn get(&self, id: i64) -> Result<Property>;

    /// Inserts a property, assigning `id` and `created_at`.
    async fn create(&self, new: NewProperty) -> Result<Property>;

    async fn update(&self, id: i64, changes: PropertyChanges) -> Result<Property>;

    /// Removes a property and returns the removed record.
    async fn delete(&self, id: i64) -> Result<Property>;
}
