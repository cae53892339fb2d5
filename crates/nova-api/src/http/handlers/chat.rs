//! Conversation handlers.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use nova_types::chat::{ChatMessage, PostChatRequest, PostChatResponse};

use crate::http::error::AppError;
use crate::http::extractors::auth::AuthUser;
use crate::http::extractors::json::ApiJson;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Cleared {
    pub message: String,
    pub removed: u64,
}

/// GET /api/chat - the most recent turns, oldest first.
pub async fn history(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<ChatMessage>>, AppError> {
    Ok(Json(state.chat_service.history(&user_id).await?))
}

/// POST /api/chat - store a turn; a user turn is answered synchronously.
pub async fn post(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ApiJson(body): ApiJson<PostChatRequest>,
) -> Result<Json<PostChatResponse>, AppError> {
    Ok(Json(state.chat_service.post(&user_id, body).await?))
}

/// DELETE /api/chat
pub async fn clear(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Cleared>, AppError> {
    let removed = state.chat_service.clear(&user_id).await?;
    Ok(Json(Cleared {
        message: "Chat cleared".to_string(),
        removed,
    }))
}
