use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lms_api::{
    config::{Config, DEV_JWT_SECRET},
    db::{create_pool, create_redis_client, Cache, MemoryStore, PgStore, Store},
    routes::{create_router, AppState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lms_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    if config.jwt_secret == DEV_JWT_SECRET {
        tracing::warn!("JWT_SECRET is not set, using the development secret");
    }

    let store: Arc<dyn Store> = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url)
                .await
                .context("Failed to connect to database")?;
            let store = PgStore::new(pool);
            store.migrate().await.context("Failed to run migrations")?;
            tracing::info!("Connected to PostgreSQL");
            Arc::new(store)
        }
        None => {
            tracing::warn!("DATABASE_URL is not set, data is kept in memory only");
            Arc::new(MemoryStore::new())
        }
    };

    let (cache, cache_handle) = match &config.redis_url {
        Some(url) => {
            let client = create_redis_client(url).context("Failed to create Redis client")?;
            let (cache, handle) = Cache::new(client).await;
            tracing::info!("Redis cache enabled");
            (Some(cache), Some(handle))
        }
        None => (None, None),
    };

    let state = Arc::new(AppState::new(store, cache, &config));
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    tracing::info!("Server running on http://{}", address);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    if let Some(handle) = cache_handle {
        handle.shutdown().await;
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
