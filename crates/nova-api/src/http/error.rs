//! Application error type mapping to HTTP status codes.
//!
//! Every error body has the shape `{ "error": <message>, "code": <CODE> }`,
//! plus `"field"` for validation failures.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use nova_types::error::{AuthError, ServiceError, ValidationError};

#[derive(Debug)]
pub enum AppError {
    /// Gate rejection. Deliberately carries no reason.
    Unauthorized,
    Service(ServiceError),
    /// The request body was not valid JSON for the endpoint.
    BadRequest(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: String,
    code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'a str>,
}

impl From<AuthError> for AppError {
    fn from(_: AuthError) -> Self {
        AppError::Unauthorized
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        AppError::Service(e)
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Service(ServiceError::Validation(e))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, field) = match &self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Unauthorized".to_string(),
                None,
            ),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone(), None)
            }
            AppError::Service(ServiceError::Validation(v)) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                v.message.clone(),
                Some(v.field.as_str()),
            ),
            AppError::Service(ServiceError::InvalidCredentials) => (
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIALS",
                "Invalid credentials".to_string(),
                None,
            ),
            AppError::Service(e @ ServiceError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", capitalize(&e.to_string()), None)
            }
            AppError::Service(ServiceError::Conflict(msg)) => {
                (StatusCode::CONFLICT, "CONFLICT", msg.clone(), None)
            }
            AppError::Service(e @ (ServiceError::Storage(_) | ServiceError::Internal(_))) => {
                tracing::error!(error = %e, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = ErrorBody {
            error: message,
            code,
            field,
        };
        (status, Json(body)).into_response()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
