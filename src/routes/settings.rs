use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{
    error::{AppError, AppResult},
    models::{Settings, SettingsInput, StatusMessage},
    routes::AppState,
};

pub async fn get(State(state): State<Arc<AppState>>) -> AppResult<Json<Settings>> {
    Ok(Json(state.store.get_settings().await?))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Json(input): Json<SettingsInput>,
) -> AppResult<Json<Settings>> {
    Ok(Json(state.store.update_settings(input).await?))
}

/// Verifies the store answers a trivial query
pub async fn test_db(State(state): State<Arc<AppState>>) -> AppResult<Json<StatusMessage>> {
    state
        .store
        .ping()
        .await
        .map_err(|e| AppError::Internal(format!("Database connection failed: {}", e)))?;
    Ok(Json(StatusMessage::success("Connection successful")))
}
