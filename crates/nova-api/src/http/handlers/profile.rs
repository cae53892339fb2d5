//! Profile of the calling user.

use axum::Json;
use axum::extract::State;

use nova_types::user::{UpdateProfileRequest, UserProfile};

use crate::http::error::AppError;
use crate::http::extractors::auth::AuthUser;
use crate::http::extractors::json::ApiJson;
use crate::state::AppState;

pub async fn get(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<UserProfile>, AppError> {
    Ok(Json(state.profile_service.get(&user_id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ApiJson(body): ApiJson<UpdateProfileRequest>,
) -> Result<Json<UserProfile>, AppError> {
    Ok(Json(state.profile_service.update(&user_id, body).await?))
}
