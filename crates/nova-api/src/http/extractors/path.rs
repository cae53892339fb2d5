//! Resource id path parameter.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use uuid::Uuid;

use nova_types::error::ServiceError;

use crate::http::error::AppError;

/// `{id}` segment parsed as a UUID. An unparseable id cannot name an
/// existing row, so it is reported as not found.
pub struct ResourceId(pub Uuid);

impl<S: Send + Sync> FromRequestParts<S> for ResourceId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::Service(ServiceError::NotFound("resource")))?;
        Uuid::parse_str(&raw)
            .map(ResourceId)
            .map_err(|_| AppError::Service(ServiceError::NotFound("resource")))
    }
}
