//! Catalog Module
//!
//! The cache consistency protocol for the property list:
//! - [`PropertyCatalog`] reads through the cache (cache-aside)
//! - [`InvalidatingStore`] evicts the snapshot on every write
//! - [`MetricsReporter`] reports the backend's hit ratio

mod accessor;
mod invalidation;
mod metrics;
mod seed;

#[cfg(test)]
mod fakes;
#[cfg(test)]
mod property_tests;

pub use accessor::PropertyCatalog;
pub use invalidation::{ChangeKind, InvalidatingStore, InvalidationHook};
pub use metrics::MetricsReporter;
pub use seed::{sample_properties, seed_sample_properties};

// == Public Constants ==
/// Cache key holding the full property snapshot
pub const ALL_PROPERTIES_KEY: &str = "all_properties";

/// Lifetime of the snapshot in seconds (1 hour)
pub const ALL_PROPERTIES_TTL: u64 = 3600;
