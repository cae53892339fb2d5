//! Tag repository trait definition.

use uuid::Uuid;

use nova_types::error::RepositoryError;
use nova_types::tag::Tag;
use nova_types::user::UserId;

pub trait TagRepository: Send + Sync {
    /// The user's tags, alphabetical.
    fn list(
        &self,
        user_id: &UserId,
    ) -> impl std::future::Future<Output = Result<Vec<Tag>, RepositoryError>> + Send;

    /// A name the user already has yields `RepositoryError::Conflict`.
    fn create(
        &self,
        tag: &Tag,
    ) -> impl std::future::Future<Output = Result<Tag, RepositoryError>> + Send;

    fn delete(
        &self,
        user_id: &UserId,
        id: &Uuid,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
