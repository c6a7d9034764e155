use std::sync::Arc;

use axum::{
    extract::State,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::Config,
    db::{Cache, MemoryStore, Store},
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    services::auth::{PasswordHasher, TokenIssuer},
};

pub mod analytics;
pub mod auth;
pub mod bot;
pub mod members;
pub mod paths;
pub mod recommendations;
pub mod settings;
pub mod tasks;

/// Shared application state
pub struct AppState {
    pub store: Arc<dyn Store>,
    /// Absent when no Redis is configured
    pub cache: Option<Cache>,
    pub passwords: PasswordHasher,
    pub tokens: TokenIssuer,
    pub recommendation_top_k: usize,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, cache: Option<Cache>, config: &Config) -> Self {
        Self {
            store,
            cache,
            passwords: PasswordHasher::new(),
            tokens: TokenIssuer::new(&config.jwt_secret, config.access_token_expire_minutes),
            recommendation_top_k: config.recommendation_top_k,
        }
    }

    /// State over an empty in-memory store with no cache
    pub fn in_memory(config: &Config) -> Self {
        Self::new(Arc::new(MemoryStore::new()), None, config)
    }
}

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .nest("/api", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API routes under /api
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Auth
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
        // Members
        .route("/members", get(members::list).post(members::create))
        .route(
            "/members/:id",
            get(members::get).put(members::update).delete(members::delete),
        )
        .route("/members/:id/skills", post(members::add_skill))
        // Tasks
        .route("/tasks", get(tasks::list).post(tasks::create))
        .route(
            "/tasks/:id",
            get(tasks::get).put(tasks::update).delete(tasks::delete),
        )
        // Learning paths
        .route("/paths", get(paths::list).post(paths::create))
        .route(
            "/paths/:id",
            get(paths::get).put(paths::update).delete(paths::delete),
        )
        // Settings
        .route("/settings", get(settings::get).put(settings::update))
        .route("/admin/test-db", get(settings::test_db))
        // Recommendations, analytics, bot
        .route(
            "/recommendations/:member_id",
            post(recommendations::recommend),
        )
        .route("/analytics", get(analytics::get))
        .route("/analytics/regenerate", post(analytics::regenerate))
        .route("/bot/command", post(bot::command))
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "LMS API is running" }))
}

/// Health check endpoint
async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let database = match state.store.ping().await {
        Ok(()) => "connected",
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the store");
            "unavailable"
        }
    };

    Json(json!({
        "status": "ok",
        "database": database,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Placeholder counters until a metrics exporter is wired in
async fn metrics() -> Json<Value> {
    Json(json!({
        "http_requests_total": 100,
        "http_request_duration_seconds": 0.5,
    }))
}
