//! Usage analytics handlers.

use axum::Json;
use axum::extract::State;

use nova_types::analytics::{Analytics, TrackEventRequest};

use crate::http::error::AppError;
use crate::http::extractors::auth::AuthUser;
use crate::http::extractors::json::ApiJson;
use crate::state::AppState;

/// GET /api/analytics - `null` before any activity.
pub async fn get(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Option<Analytics>>, AppError> {
    Ok(Json(state.analytics_service.get(&user_id).await?))
}

/// POST /api/analytics/track
pub async fn track(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ApiJson(body): ApiJson<TrackEventRequest>,
) -> Result<Json<Analytics>, AppError> {
    Ok(Json(state.analytics_service.track(&user_id, body).await?))
}
