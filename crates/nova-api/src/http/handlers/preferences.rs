//! User preference handlers.

use axum::Json;
use axum::extract::State;

use nova_types::preferences::{UpdatePreferencesRequest, UserPreferences};

use crate::http::error::AppError;
use crate::http::extractors::auth::AuthUser;
use crate::http::extractors::json::ApiJson;
use crate::state::AppState;

/// GET /api/preferences - `null` until the user first saves preferences.
pub async fn get(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Option<UserPreferences>>, AppError> {
    Ok(Json(state.preferences_service.get(&user_id).await?))
}

/// PUT /api/preferences - partial upsert.
pub async fn update(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ApiJson(body): ApiJson<UpdatePreferencesRequest>,
) -> Result<Json<UserPreferences>, AppError> {
    Ok(Json(state.preferences_service.update(&user_id, body).await?))
}
