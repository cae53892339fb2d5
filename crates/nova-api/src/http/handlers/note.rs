//! Note CRUD handlers.

use axum::Json;
use axum::extract::State;

use nova_types::note::{CreateNoteRequest, Note, UpdateNoteRequest};

use crate::http::error::AppError;
use crate::http::extractors::auth::AuthUser;
use crate::http::extractors::json::ApiJson;
use crate::http::extractors::path::ResourceId;
use crate::http::handlers::{Deleted, deleted};
use crate::state::AppState;

/// GET /api/notes - newest first.
pub async fn list(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Note>>, AppError> {
    Ok(Json(state.note_service.list(&user_id).await?))
}

/// POST /api/notes
pub async fn create(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ApiJson(body): ApiJson<CreateNoteRequest>,
) -> Result<Json<Note>, AppError> {
    Ok(Json(state.note_service.create(&user_id, body).await?))
}

/// PUT /api/notes/{id}
pub async fn update(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ResourceId(id): ResourceId,
    ApiJson(body): ApiJson<UpdateNoteRequest>,
) -> Result<Json<Note>, AppError> {
    Ok(Json(state.note_service.update(&user_id, &id, body).await?))
}

/// DELETE /api/notes/{id}
pub async fn delete(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ResourceId(id): ResourceId,
) -> Result<Json<Deleted>, AppError> {
    state.note_service.delete(&user_id, &id).await?;
    Ok(deleted("Note"))
}
