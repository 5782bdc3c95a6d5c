//! HTTP server initialization and runtime setup.
//!
//! Handles cart storage selection, the one-time catalog load, and the Axum
//! server lifecycle.

use crate::application::services::{CartService, CatalogService};
use crate::config::Config;
use crate::infrastructure::sheets::GvizSource;
use crate::infrastructure::storage::{CartStorage, FileStorage, RedisStorage};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Cart storage (Redis, or the file backend as fallback)
/// - The cart, restored once from storage
/// - The catalog load, spawned in the background
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The storage directory cannot be created
/// - The sheet client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let storage = open_storage(&config).await?;

    let cart = Arc::new(CartService::restore(storage, config.cart_storage_key.clone()).await);

    let source = GvizSource::new(
        config.sheet_endpoint.clone(),
        config.sheet_id.clone(),
        config.sheet_name.clone(),
        Duration::from_secs(config.fetch_timeout_seconds),
    )
    .context("Failed to build sheet client")?;
    let catalog = Arc::new(CatalogService::new(Arc::new(source)));

    let loader = catalog.clone();
    tokio::spawn(async move {
        // Outcome is stored in the service and logged there.
        let _ = loader.load().await;
    });
    tracing::info!("Catalog load started");

    let state = AppState::new(catalog, cart);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Chooses the cart backend: Redis when configured and reachable, otherwise files.
pub async fn open_storage(config: &Config) -> Result<Arc<dyn CartStorage>> {
    if let Some(redis_url) = &config.redis_url {
        match RedisStorage::connect(redis_url).await {
            Ok(redis) => {
                tracing::info!("Cart storage: Redis");
                return Ok(Arc::new(redis));
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using file storage.", e);
            }
        }
    }

    let files = FileStorage::open(&config.cart_storage_dir)
        .await
        .with_context(|| format!("Failed to open cart storage in '{}'", config.cart_storage_dir))?;
    tracing::info!("Cart storage: files in {}", files.dir().display());
    Ok(Arc::new(files))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutting down");
}
