//! Domain entities and response bodies
//!
//! `property` holds the Property entity and its write inputs; `responses`
//! holds the JSON envelopes returned by the API.

pub mod property;
pub mod responses;

pub use property::{NewProperty, Property, PropertyChanges};
pub use responses::{
    CacheMetrics, DeleteResponse, HealthResponse, MetricsResponse, PropertyListResponse,
    PropertyResponse,
};
