pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod http;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;

use axum::{Router, http::StatusCode, middleware as axum_middleware};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::{
    config::{AppConfig, StoreBackend},
    db::{BulletinStore, MemoryStore, RedisStore, redis_client::create_redis_pool},
    errors::AppError,
    middleware::{cors_layer, create_global_rate_limiter, rate_limit_middleware},
    state::AppState,
};

pub async fn create_store(config: &AppConfig) -> Result<Arc<dyn BulletinStore>, AppError> {
    match &config.store {
        StoreBackend::Redis { url } => {
            let pool = create_redis_pool(url).await?;
            tracing::info!("Using Redis store");
            Ok(Arc::new(RedisStore::new(pool)))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store, data is lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

pub fn create_app(state: AppState, config: &AppConfig) -> Result<Router, AppError> {
    let global_rate_limiter = create_global_rate_limiter(config.rate_limit_per_minute);

    // Fallback first so unknown routes pass through the same layers.
    Ok(Router::new()
        .merge(http::create_http_routes(state))
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(global_rate_limiter.clone(), req, next)
        }))
        .layer(cors_layer(&config.allowed_origins)?)
        .layer(TraceLayer::new_for_http()))
}

pub async fn start_server() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        "Rating consistency mode: {:?}",
        config.rating_consistency
    );

    let store = create_store(&config).await?;
    let state = AppState::new(&config, store);
    let app = create_app(state, &config)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!("Bulletin server running at http://0.0.0.0:{}", config.port);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
