//! SQLite storage layer.
//!
//! Repository implementations backed by SQLite with WAL mode and split
//! read/write connection pools. Timestamps are stored as fixed-width
//! RFC 3339 text so they sort lexically.

pub mod analytics;
pub mod chat;
pub mod event;
pub mod note;
pub mod notification;
pub mod pool;
pub mod preferences;
pub mod tag;
pub mod task;
pub mod user;

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use nova_types::error::RepositoryError;
use nova_types::user::UserId;

pub(crate) fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

pub(crate) fn parse_optional_datetime(
    s: Option<String>,
) -> Result<Option<DateTime<Utc>>, RepositoryError> {
    s.as_deref().map(parse_datetime).transpose()
}

pub(crate) fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn parse_uuid(s: &str) -> Result<Uuid, RepositoryError> {
    Uuid::parse_str(s).map_err(|e| RepositoryError::Query(format!("invalid id: {e}")))
}

pub(crate) fn parse_user_id(s: &str) -> Result<UserId, RepositoryError> {
    s.parse::<UserId>()
        .map_err(|e| RepositoryError::Query(format!("invalid user id: {e}")))
}

pub(crate) fn query_error(err: sqlx::Error) -> RepositoryError {
    RepositoryError::Query(err.to_string())
}

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.message().contains("UNIQUE"))
}
