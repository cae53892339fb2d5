//! Tag handlers.

use axum::Json;
use axum::extract::State;

use nova_types::tag::{CreateTagRequest, Tag};

use crate::http::error::AppError;
use crate::http::extractors::auth::AuthUser;
use crate::http::extractors::json::ApiJson;
use crate::http::extractors::path::ResourceId;
use crate::http::handlers::{Deleted, deleted};
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Tag>>, AppError> {
    Ok(Json(state.tag_service.list(&user_id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ApiJson(body): ApiJson<CreateTagRequest>,
) -> Result<Json<Tag>, AppError> {
    Ok(Json(state.tag_service.create(&user_id, body).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ResourceId(id): ResourceId,
) -> Result<Json<Deleted>, AppError> {
    state.tag_service.delete(&user_id, &id).await?;
    Ok(deleted("Tag"))
}
