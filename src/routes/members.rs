use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::{Member, MemberUpdate, NewMember, Skill, StatusMessage},
    routes::AppState,
};

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Member>>> {
    Ok(Json(state.store.list_members().await?))
}

/// Admin-side creation; same rules as registration
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NewMember>,
) -> AppResult<Json<Member>> {
    if state.store.member_by_email(&request.email).await?.is_some() {
        return Err(AppError::InvalidInput("Email already registered".to_string()));
    }

    let record = state.passwords.prepare_member(request)?;
    Ok(Json(state.store.create_member(record).await?))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Json<Member>> {
    Ok(Json(state.store.get_member(id).await?))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(update): Json<MemberUpdate>,
) -> AppResult<Json<Member>> {
    Ok(Json(state.store.update_member(id, update).await?))
}

pub async fn add_skill(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(skill): Json<Skill>,
) -> AppResult<Json<Member>> {
    if skill.name.trim().is_empty() {
        return Err(AppError::InvalidInput("Skill name is required".to_string()));
    }
    Ok(Json(state.store.add_member_skill(id, skill).await?))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Json<StatusMessage>> {
    state.store.delete_member(id).await?;
    tracing::info!(member_id = id, "Member deleted");
    Ok(Json(StatusMessage::success("Member deleted")))
}
