//! Notification handlers.

use axum::Json;
use axum::extract::State;

use nova_types::notification::{CreateNotificationRequest, Notification};

use crate::http::error::AppError;
use crate::http::extractors::auth::AuthUser;
use crate::http::extractors::json::ApiJson;
use crate::http::extractors::path::ResourceId;
use crate::http::handlers::{Deleted, deleted};
use crate::state::AppState;

/// GET /api/notifications - newest first.
pub async fn list(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Notification>>, AppError> {
    Ok(Json(state.notification_service.list(&user_id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ApiJson(body): ApiJson<CreateNotificationRequest>,
) -> Result<Json<Notification>, AppError> {
    Ok(Json(state.notification_service.create(&user_id, body).await?))
}

/// PUT /api/notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ResourceId(id): ResourceId,
) -> Result<Json<Notification>, AppError> {
    Ok(Json(state.notification_service.mark_read(&user_id, &id).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ResourceId(id): ResourceId,
) -> Result<Json<Deleted>, AppError> {
    state.notification_service.delete(&user_id, &id).await?;
    Ok(deleted("Notification"))
}
