//! Error types for the property catalog
//!
//! One thiserror enum covers the store, the cache clients and the HTTP layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Catalog Error Enum ==
/// Unified error type for the property catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The property store could not serve the request
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// The cache backend could not serve the request
    #[error("Cache unavailable: {0}")]
    CacheUnavailable(String),

    /// No property with this id
    #[error("Property not found: {0}")]
    NotFound(i64),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<redis::RedisError> for CatalogError {
    fn from(err: redis::RedisError) -> Self {
        CatalogError::CacheUnavailable(err.to_string())
    }
}

impl CatalogError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::StoreUnavailable(_) | CatalogError::CacheUnavailable(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
        }));

        (self.status_code(), body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the property catalog.
pub type Result<T> = std::result::Result<T, CatalogError>;
