//! API Routes
//!
//! Configures the Axum router with all catalog endpoints.

use axum::{
    middleware,
    routing::{get, MethodRouter},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_metrics_handler, create_property_handler, delete_property_handler,
    get_property_handler, health_handler, list_properties_handler, update_property_handler,
    AppState,
};
use super::response_cache::{cache_response, ResponseCache};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /properties/` - List every property (cache-aside)
/// - `POST /properties/` - Create a property
/// - `GET /properties/cache-metrics/` - Cache hit/miss metrics
/// - `GET /properties/:id` - Fetch one property from the store
/// - `PUT /properties/:id` - Update a property
/// - `DELETE /properties/:id` - Delete a property
/// - `GET /health` - Health check endpoint
///
/// The response cache, when configured with a non-zero TTL, wraps only the list GET.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut list: MethodRouter<AppState> = get(list_properties_handler);
    if let Some(response_cache) = state
        .response_cache
        .clone()
        .filter(ResponseCache::is_enabled)
    {
        list = list.layer(middleware::from_fn_with_state(response_cache, cache_response));
    }

    Router::new()
        .route("/properties/", list.post(create_property_handler))
        .route("/properties/cache-metrics/", get(cache_metrics_handler))
        .route(
            "/properties/:id",
            get(get_property_handler)
                .put(update_property_handler)
                .delete(delete_property_handler),
        )
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::store::MemoryStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::new(Arc::new(MemoryCache::new()), Arc::new(MemoryStore::new()));
        create_router(state)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_metrics_route_is_not_an_id() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/properties/cache-metrics/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    async fn total_requests(app: &Router) -> u64 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/properties/cache-metrics/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        json["cache_metrics"]["total_requests"].as_u64().unwrap()
    }

    async fn list_twice(app: &Router) {
        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .uri("/properties/")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn test_zero_ttl_response_cache_is_not_installed() {
        let response_cache = ResponseCache::new(0);
        let state = AppState::new(Arc::new(MemoryCache::new()), Arc::new(MemoryStore::new()))
            .with_response_cache(response_cache.clone());
        let app = create_router(state);

        list_twice(&app).await;

        // Both lists reached the accessor and nothing was stored in the layer.
        assert_eq!(total_requests(&app).await, 2);
        assert!(response_cache.entries.is_empty().await);
    }

    #[tokio::test]
    async fn test_enabled_response_cache_absorbs_repeat_list() {
        let state = AppState::new(Arc::new(MemoryCache::new()), Arc::new(MemoryStore::new()))
            .with_response_cache(ResponseCache::new(900));
        let app = create_router(state);

        list_twice(&app).await;

        assert_eq!(total_requests(&app).await, 1);
    }

    #[tokio::test]
    async fn test_unknown_property_is_404() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/properties/99")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
