//! Task CRUD handlers.

use axum::Json;
use axum::extract::State;

use nova_types::task::{CreateTaskRequest, Task, UpdateTaskRequest};

use crate::http::error::AppError;
use crate::http::extractors::auth::AuthUser;
use crate::http::extractors::json::ApiJson;
use crate::http::extractors::path::ResourceId;
use crate::http::handlers::{Deleted, deleted};
use crate::state::AppState;

/// GET /api/tasks - newest first.
pub async fn list(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Task>>, AppError> {
    Ok(Json(state.task_service.list(&user_id).await?))
}

/// POST /api/tasks
pub async fn create(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ApiJson(body): ApiJson<CreateTaskRequest>,
) -> Result<Json<Task>, AppError> {
    Ok(Json(state.task_service.create(&user_id, body).await?))
}

/// PUT /api/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ResourceId(id): ResourceId,
    ApiJson(body): ApiJson<UpdateTaskRequest>,
) -> Result<Json<Task>, AppError> {
    Ok(Json(state.task_service.update(&user_id, &id, body).await?))
}

/// DELETE /api/tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ResourceId(id): ResourceId,
) -> Result<Json<Deleted>, AppError> {
    state.task_service.delete(&user_id, &id).await?;
    Ok(deleted("Task"))
}
