use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{StatusMessage, Task, TaskCreate, TaskUpdate},
    routes::AppState,
};

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Task>>> {
    Ok(Json(state.store.list_tasks().await?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(create): Json<TaskCreate>,
) -> AppResult<Json<Task>> {
    Ok(Json(state.store.create_task(create).await?))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Json<Task>> {
    Ok(Json(state.store.get_task(id).await?))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(update): Json<TaskUpdate>,
) -> AppResult<Json<Task>> {
    Ok(Json(state.store.update_task(id, update).await?))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Json<StatusMessage>> {
    state.store.delete_task(id).await?;
    Ok(Json(StatusMessage::success("Task deleted")))
}
