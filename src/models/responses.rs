//! Response DTOs for the catalog API
//!
//! Every success body carries `"status": "success"`.

use serde::Serialize;

use super::Property;

const SUCCESS: &str = "success";

/// Response body for GET /properties/
#[derive(Debug, Clone, Serialize)]
pub struct PropertyListResponse {
    pub status: String,
    pub count: usize,
    pub properties: Vec<Property>,
}

impl PropertyListResponse {
    pub fn new(properties: Vec<Property>) -> Self {
        Self {
            status: SUCCESS.to_string(),
            count: properties.len(),
            properties,
        }
    }
}

/// Cache hit/miss counters with the derived hit ratio.
///
/// `error` is only present on the degraded path, where every number is zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheMetrics {
    pub keyspace_hits: u64,
    pub keyspace_misses: u64,
    pub total_requests: u64,
    /// Percentage rounded to two decimals
    pub hit_ratio: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CacheMetrics {
    /// Builds metrics from raw counters; a zero total yields a zero ratio.
    pub fn from_counters(hits: u64, misses: u64) -> Self {
        let total_requests = hits + misses;
        let hit_ratio = if total_requests > 0 {
            round_two_places(hits as f64 / total_requests as f64 * 100.0)
        } else {
            0.0
        };
        Self {
            keyspace_hits: hits,
            keyspace_misses: misses,
            total_requests,
            hit_ratio,
            error: None,
        }
    }

    /// Zeroed metrics carrying the failure description.
    pub fn degraded(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::from_counters(0, 0)
        }
    }
}

fn round_two_places(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Response body for GET /properties/cache-metrics/
#[derive(Debug, Clone, Serialize)]
pub struct MetricsResponse {
    pub status: String,
    pub cache_metrics: CacheMetrics,
}

impl MetricsResponse {
    pub fn new(cache_metrics: CacheMetrics) -> Self {
        Self {
            status: SUCCESS.to_string(),
            cache_metrics,
        }
    }
}

/// Response body for single-property reads and writes
#[derive(Debug, Clone, Serialize)]
pub struct PropertyResponse {
    pub status: String,
    pub property: Property,
}

impl PropertyResponse {
    pub fn new(property: Property) -> Self {
        Self {
            status: SUCCESS.to_string(),
            property,
        }
    }
}

/// Response body for DELETE /properties/:id
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub status: String,
    pub message: String,
}

impl DeleteResponse {
    pub fn new(property: &Property) -> Self {
        Self {
            status: SUCCESS.to_string(),
            message: format!("Property '{}' deleted successfully", property.title),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
