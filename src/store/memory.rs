//! In-process property store

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::{CatalogError, Result};
use crate::models::{NewProperty, Property, PropertyChanges};
use crate::store::PropertyStore;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Property>,
    last_id: i64,
}

// == Memory Store ==
/// Property table held in memory. Ids are assigned sequentially from 1.
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: RwLock<Table>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

// == PropertyStore Implementation ==
#[async_trait]
impl PropertyStore for MemoryStore {
    async fn get_all(&self) -> Result<Vec<Property>> {
        let table = self.table.read().await;
        let mut properties: Vec<Property> = table.rows.values().cloned().collect();
        properties.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(properties)
    }

    async fn get(&self, id: i64) -> Result<Property> {
        self.table
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }

    async fn create(&self, new: NewProperty) -> Result<Property> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let property = Property {
            id: table.last_id,
            title: new.title,
            description: new.description,
            price: new.price,
            location: new.location,
            created_at: Utc::now(),
        };
        table.rows.insert(property.id, property.clone());
        Ok(property)
    }

    async fn update(&self, id: i64, changes: PropertyChanges) -> Result<Property> {
        let mut table = self.table.write().await;
        let property = table.rows.get_mut(&id).ok_or(CatalogError::NotFound(id))?;
        changes.apply_to(property);
        Ok(property.clone())
    }

    async fn delete(&self, id: i64) -> Result<Property> {
        self.table
            .write()
            .await
            .rows
            .remove(&id)
            .ok_or(CatalogError::NotFound(id))
    }
}
