use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{
    cached,
    db::CacheKey,
    error::AppResult,
    models::{AnalyticsData, StatusMessage},
    routes::AppState,
    services::analytics::{self, ANALYTICS_TTL},
};

pub async fn get(State(state): State<Arc<AppState>>) -> AppResult<Json<AnalyticsData>> {
    let data = match &state.cache {
        Some(cache) => {
            let data: AppResult<AnalyticsData> = cached!(
                cache,
                CacheKey::AnalyticsSummary,
                ANALYTICS_TTL,
                analytics::summary(state.store.as_ref())
            );
            data?
        }
        None => analytics::summary(state.store.as_ref()).await?,
    };

    Ok(Json(data))
}

/// Drops the cached dashboard so the next read recomputes it
pub async fn regenerate(State(state): State<Arc<AppState>>) -> AppResult<Json<StatusMessage>> {
    if let Some(cache) = &state.cache {
        cache.invalidate(&CacheKey::AnalyticsSummary).await?;
    }
    Ok(Json(StatusMessage::success("Analytics regeneration started")))
}
