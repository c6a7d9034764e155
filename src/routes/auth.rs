use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, State},
    http::{header, request::Parts},
    Json,
};
use serde::Serialize;

use crate::{
    error::{AppError, AppResult},
    models::{LoginRequest, Member, NewMember},
    routes::AppState,
};

#[derive(Debug, Serialize)]
pub struct LoginUser {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub user: LoginUser,
}

/// The member identified by the request's bearer token
pub struct CurrentMember(pub Member);

#[async_trait]
impl FromRequestParts<Arc<AppState>> for CurrentMember {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| AppError::Unauthorized("Not authenticated".to_string()))?;

        let claims = state.tokens.verify(token)?;

        state
            .store
            .member_by_email(&claims.sub)
            .await?
            .map(CurrentMember)
            .ok_or_else(|| AppError::Unauthorized("Could not validate credentials".to_string()))
    }
}

/// Registers a new member with a password
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NewMember>,
) -> AppResult<Json<Member>> {
    if state.store.member_by_email(&request.email).await?.is_some() {
        return Err(AppError::InvalidInput("Email already registered".to_string()));
    }

    let record = state.passwords.prepare_member(request)?;
    let member = state.store.create_member(record).await?;

    tracing::info!(member_id = member.id, "Member registered");
    Ok(Json(member))
}

/// Exchanges email and password for an access token
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let rejected = || AppError::Unauthorized("Incorrect email or password".to_string());

    let member = state
        .store
        .member_by_email(&request.username)
        .await?
        .ok_or_else(rejected)?;

    let hash = member.password_hash.as_deref().ok_or_else(rejected)?;
    if !state.passwords.verify_password(&request.password, hash)? {
        tracing::info!(member_id = member.id, "Login rejected");
        return Err(rejected());
    }

    let access_token = state.tokens.issue(&member.email)?;

    Ok(Json(LoginResponse {
        access_token,
        token_type: "bearer",
        user: LoginUser {
            id: member.id,
            name: member.name,
            email: member.email,
        },
    }))
}

/// Returns the authenticated member
pub async fn me(CurrentMember(member): CurrentMember) -> Json<Member> {
    Json(member)
}
