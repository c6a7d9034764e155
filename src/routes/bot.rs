use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    routes::AppState,
    services::bot::{self, BotCommand, BotResponse},
};

pub async fn command(
    State(state): State<Arc<AppState>>,
    Json(command): Json<BotCommand>,
) -> AppResult<Json<BotResponse>> {
    let response = bot::dispatch(state.store.as_ref(), command, state.recommendation_top_k).await?;
    Ok(Json(response))
}
