use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    recommender::Recommendation,
    routes::AppState,
    services::recommendations,
};

#[derive(Debug, Deserialize)]
pub struct RecommendationParams {
    pub top_k: Option<usize>,
}

/// Handler for recommendations endpoint
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Path(member_id): Path<i64>,
    params: Result<Query<RecommendationParams>, QueryRejection>,
) -> AppResult<Json<Vec<Recommendation>>> {
    let Query(params) = params.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let top_k = params.top_k.unwrap_or(state.recommendation_top_k);

    tracing::info!(
        request_id = %request_id,
        member_id,
        top_k,
        "Processing recommendation request"
    );

    let recommendations =
        recommendations::get_recommendations(state.store.as_ref(), member_id, top_k).await?;

    Ok(Json(recommendations))
}
