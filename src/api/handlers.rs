//! API Handlers
//!
//! HTTP request handlers for the catalog endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::ResponseCache;
use crate::cache::CacheClient;
use crate::catalog::{InvalidatingStore, InvalidationHook, MetricsReporter, PropertyCatalog};
use crate::error::{CatalogError, Result};
use crate::models::{
    DeleteResponse, HealthResponse, MetricsResponse, NewProperty, PropertyChanges,
    PropertyListResponse, PropertyResponse,
};
use crate::store::PropertyStore;

/// Application state shared across all handlers.
///
/// `store` is the invalidating write path; writes made through it evict the
/// cached snapshot that `catalog` serves.
#[derive(Clone)]
pub struct AppState {
    pub catalog: PropertyCatalog,
    pub metrics: MetricsReporter,
    pub store: Arc<dyn PropertyStore>,
    pub response_cache: Option<ResponseCache>,
}

impl AppState {
    /// Wires the accessor, the invalidation hook and the reporter around one
    /// cache handle, using the default snapshot TTL.
    pub fn new(cache: Arc<dyn CacheClient>, store: Arc<dyn PropertyStore>) -> Self {
        Self::with_cache_ttl(cache, store, crate::catalog::ALL_PROPERTIES_TTL)
    }

    pub fn with_cache_ttl(
        cache: Arc<dyn CacheClient>,
        store: Arc<dyn PropertyStore>,
        ttl_seconds: u64,
    ) -> Self {
        let store: Arc<dyn PropertyStore> = Arc::new(InvalidatingStore::new(
            store,
            InvalidationHook::new(cache.clone()),
        ));
        Self {
            catalog: PropertyCatalog::with_ttl(cache.clone(), store.clone(), ttl_seconds),
            metrics: MetricsReporter::new(cache),
            store,
            response_cache: None,
        }
    }

    /// Enables the transport-level response cache on the list endpoint.
    pub fn with_response_cache(mut self, response_cache: ResponseCache) -> Self {
        self.response_cache = Some(response_cache);
        self
    }
}

/// Handler for GET /properties/
pub async fn list_properties_handler(
    State(state): State<AppState>,
) -> Result<Json<PropertyListResponse>> {
    let properties = state.catalog.fetch_all_properties().await?;
    Ok(Json(PropertyListResponse::new(properties)))
}

/// Handler for GET /properties/cache-metrics/
pub async fn cache_metrics_handler(State(state): State<AppState>) -> Json<MetricsResponse> {
    Json(MetricsResponse::new(state.metrics.report().await))
}

/// Handler for POST /properties/
pub async fn create_property_handler(
    State(state): State<AppState>,
    Json(req): Json<NewProperty>,
) -> Result<(StatusCode, Json<PropertyResponse>)> {
    if let Some(error_msg) = req.validate() {
        return Err(CatalogError::InvalidRequest(error_msg));
    }

    let property = state.store.create(req).await?;
    Ok((StatusCode::CREATED, Json(PropertyResponse::new(property))))
}

/// Handler for GET /properties/:id
///
/// Reads the store directly; single records are not cached.
pub async fn get_property_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PropertyResponse>> {
    let property = state.store.get(id).await?;
    Ok(Json(PropertyResponse::new(property)))
}

/// Handler for PUT /properties/:id
pub async fn update_property_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<PropertyChanges>,
) -> Result<Json<PropertyResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CatalogError::InvalidRequest(error_msg));
    }

    let property = state.store.update(id, req).await?;
    Ok(Json(PropertyResponse::new(property)))
}

/// Handler for DELETE /properties/:id
pub async fn delete_property_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>> {
    let property = state.store.delete(id).await?;
    Ok(Json(DeleteResponse::new(&property)))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
