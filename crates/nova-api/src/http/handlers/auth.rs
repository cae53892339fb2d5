//! Registration and login. These routes sit outside the gate.

use axum::Json;
use axum::extract::State;

use nova_types::user::{AuthResponse, LoginRequest, RegisterRequest};

use crate::http::error::AppError;
use crate::http::extractors::json::ApiJson;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    Ok(Json(state.auth_service.register(body).await?))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    Ok(Json(state.auth_service.login(body).await?))
}
