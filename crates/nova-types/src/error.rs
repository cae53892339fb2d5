use thiserror::Error;

/// Errors from repository operations (used by trait definitions in nova-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),
}

/// Rejection produced by the authentication gate.
///
/// Missing, malformed, expired and forged credentials all collapse into this
/// one variant so callers cannot tell them apart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("unauthorized")]
    Unauthorized,
}

/// Failure inside a credential codec or password hasher.
///
/// These carry the internal reason for logging; the gate never surfaces them.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("credential expired")]
    Expired,

    #[error("credential signature mismatch")]
    InvalidSignature,

    #[error("malformed credential: {0}")]
    Malformed(String),

    #[error("credential subject is not a user id: {0}")]
    InvalidSubject(String),

    #[error("failed to sign credential: {0}")]
    Signing(String),

    #[error("password hashing failed: {0}")]
    Hashing(String),
}

/// A payload field that failed validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors returned by the resource services in nova-core.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("storage error: {0}")]
    Storage(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Translate a repository failure for the named resource.
    pub fn from_repository(resource: &'static str, err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound(resource),
            RepositoryError::Conflict(msg) => ServiceError::Conflict(msg),
            RepositoryError::Connection => ServiceError::Storage("connection unavailable".into()),
            RepositoryError::Query(msg) => ServiceError::Storage(msg),
        }
    }
}
