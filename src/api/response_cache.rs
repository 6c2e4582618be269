//! Transport-level response cache
//!
//! Caches successful GET bodies by path and query in its own [`MemoryCache`].
//! Its TTL is independent of the `all_properties` snapshot and writes do not
//! evict it, so a cached response can outlive an invalidation by up to its TTL.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::cache::{CacheClient, MemoryCache};

const KEY_PREFIX: &str = "response:";

// == Response Cache ==
/// Handle to the response cache shared by the middleware and the cleanup task.
///
/// A `ttl_seconds` of 0 disables the layer: [`create_router`](crate::api::create_router)
/// does not install it.
#[derive(Clone)]
pub struct ResponseCache {
    pub entries: Arc<MemoryCache>,
    pub ttl_seconds: u64,
}

impl ResponseCache {
    pub fn new(ttl_seconds: u64) -> Self {
        Self::with_cache(Arc::new(MemoryCache::new()), ttl_seconds)
    }

    pub fn with_cache(entries: Arc<MemoryCache>, ttl_seconds: u64) -> Self {
        Self {
            entries,
            ttl_seconds,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.ttl_seconds > 0
    }
}

// == Middleware ==
/// Middleware serving repeat GETs from the response cache.
///
/// Only 200 responses are stored. Cache errors fall through to the handler.
pub async fn cache_response(
    State(cache): State<ResponseCache>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() != Method::GET {
        return next.run(request).await;
    }

    let key = format!(
        "{}{}",
        KEY_PREFIX,
        request
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or_else(|| request.uri().path())
    );

    match cache.entries.get(&key).await {
        Ok(Some(body)) => {
            debug!("Serving {} from response cache", key);
            return json_body(body);
        }
        Ok(None) => {}
        Err(e) => warn!("Response cache read failed for {}: {}", key, e),
    }

    let response = next.run(request).await;
    if response.status() != StatusCode::OK {
        return response;
    }

    let (parts, body) = response.into_parts();
    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Could not buffer response for {}: {}", key, e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    if let Ok(text) = std::str::from_utf8(&bytes) {
        if let Err(e) = cache
            .entries
            .set(&key, text.to_string(), cache.ttl_seconds)
            .await
        {
            warn!("Response cache write failed for {}: {}", key, e);
        }
    }

    Response::from_parts(parts, Body::from(bytes))
}

fn json_body(body: String) -> Response {
    let mut response = Response::new(Body::from(body));
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}
