//! API Module
//!
//! HTTP handlers, routing and the response cache layer.

pub mod handlers;
pub mod response_cache;
pub mod routes;

pub use handlers::*;
pub use response_cache::{cache_response, ResponseCache};
pub use routes::create_router;
