//! Property Catalog - a property listing API with a cache-aside read path
//!
//! Reads of the full property list go through a cache under a single key;
//! every write evicts that key before returning.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
