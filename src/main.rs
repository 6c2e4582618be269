//! Property Catalog server binary

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use property_catalog::api::{create_router, AppState, ResponseCache};
use property_catalog::cache::{CacheClient, MemoryCache, RedisCache};
use property_catalog::catalog::seed_sample_properties;
use property_catalog::config::Config;
use property_catalog::store::MemoryStore;
use property_catalog::tasks::spawn_cleanup_task;

/// Main entry point for the Property Catalog server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Connect the cache backend (Redis, or the in-process cache)
/// 4. Wire the store, optionally seed it, and add the response cache
/// 5. Start background TTL cleanup task
/// 6. Serve HTTP until SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "property_catalog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Property Catalog server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, cache_ttl={}s, response_cache_ttl={}s, cleanup_interval={}s",
        config.server_port, config.cache_ttl, config.response_cache_ttl, config.cleanup_interval
    );

    let mut memory_caches = Vec::new();
    let cache: Arc<dyn CacheClient> = match &config.redis_url {
        Some(url) => {
            let redis = RedisCache::connect(url)
                .await
                .with_context(|| format!("connecting to Redis at {}", url))?;
            Arc::new(redis) as Arc<dyn CacheClient>
        }
        None => {
            info!("REDIS_URL not set, using the in-process cache");
            let memory = Arc::new(MemoryCache::new());
            memory_caches.push(memory.clone());
            memory as Arc<dyn CacheClient>
        }
    };

    let mut state =
        AppState::with_cache_ttl(cache, Arc::new(MemoryStore::new()), config.cache_ttl);

    if config.seed_sample_data {
        let created = seed_sample_properties(state.store.as_ref())
            .await
            .context("seeding sample properties")?;
        info!("Sample data ready ({} new properties)", created);
    }

    if config.response_cache_ttl > 0 {
        let response_cache = ResponseCache::new(config.response_cache_ttl);
        memory_caches.push(response_cache.entries.clone());
        state = state.with_response_cache(response_cache);
    }

    let cleanup_handle = spawn_cleanup_task(memory_caches, config.cleanup_interval);

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("serving HTTP")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM), then aborts the cleanup task.
async fn shutdown_signal(cleanup_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    cleanup_handle.abort();
    warn!("Cleanup task aborted");
}
