//! User repository trait definition.

use nova_types::error::RepositoryError;
use nova_types::user::{User, UserId};

/// Implementations live in nova-infra (e.g., SqliteUserRepository).
pub trait UserRepository: Send + Sync {
    /// Insert a new account. A taken e-mail yields `RepositoryError::Conflict`.
    fn create(
        &self,
        user: &User,
    ) -> impl std::future::Future<Output = Result<User, RepositoryError>> + Send;

    fn get_by_id(
        &self,
        id: &UserId,
    ) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;

    /// Lookup by normalised (lower-cased) e-mail.
    fn get_by_email(
        &self,
        email: &str,
    ) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;

    /// Persist name, avatar and bio.
    fn update_profile(
        &self,
        user: &User,
    ) -> impl std::future::Future<Output = Result<User, RepositoryError>> + Send;
}
