//! Bearer credential extractor.
//!
//! Runs the authentication gate on the `Authorization` header. Handlers that
//! take an [`AuthUser`] only run for a verified caller.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use nova_core::auth::gate;
use nova_types::user::UserId;

use crate::http::error::AppError;
use crate::state::AppState;

/// The verified caller.
#[derive(Debug, Clone)]
pub struct AuthUser(pub UserId);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // A header that is not visible ASCII is treated as absent.
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        let user_id = gate::authenticate(header, state.credentials.as_ref())?;
        Ok(AuthUser(user_id))
    }
}
