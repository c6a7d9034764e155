use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{LearningPath, LearningPathInput, StatusMessage},
    routes::AppState,
};

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<LearningPath>>> {
    Ok(Json(state.store.list_paths().await?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(input): Json<LearningPathInput>,
) -> AppResult<Json<LearningPath>> {
    Ok(Json(state.store.create_path(input).await?))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Json<LearningPath>> {
    Ok(Json(state.store.get_path(id).await?))
}

/// Replaces the whole path, modules included
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(input): Json<LearningPathInput>,
) -> AppResult<Json<LearningPath>> {
    Ok(Json(state.store.update_path(id, input).await?))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Json<StatusMessage>> {
    state.store.delete_path(id).await?;
    Ok(Json(StatusMessage::success("Path deleted")))
}
