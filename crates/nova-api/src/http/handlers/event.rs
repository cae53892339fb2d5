//! Calendar event CRUD handlers.

use axum::Json;
use axum::extract::State;

use nova_types::event::{CalendarEvent, CreateEventRequest, UpdateEventRequest};

use crate::http::error::AppError;
use crate::http::extractors::auth::AuthUser;
use crate::http::extractors::json::ApiJson;
use crate::http::extractors::path::ResourceId;
use crate::http::handlers::{Deleted, deleted};
use crate::state::AppState;

/// GET /api/events - by start time.
pub async fn list(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<CalendarEvent>>, AppError> {
    Ok(Json(state.event_service.list(&user_id).await?))
}

/// POST /api/events
pub async fn create(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ApiJson(body): ApiJson<CreateEventRequest>,
) -> Result<Json<CalendarEvent>, AppError> {
    Ok(Json(state.event_service.create(&user_id, body).await?))
}

/// PUT /api/events/{id}
pub async fn update(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ResourceId(id): ResourceId,
    ApiJson(body): ApiJson<UpdateEventRequest>,
) -> Result<Json<CalendarEvent>, AppError> {
    Ok(Json(state.event_service.update(&user_id, &id, body).await?))
}

/// DELETE /api/events/{id}
pub async fn delete(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ResourceId(id): ResourceId,
) -> Result<Json<Deleted>, AppError> {
    state.event_service.delete(&user_id, &id).await?;
    Ok(deleted("Event"))
}
