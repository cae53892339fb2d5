//! Note repository trait definition.

use uuid::Uuid;

use nova_types::error::RepositoryError;
use nova_types::note::Note;
use nova_types::user::UserId;

pub trait NoteRepository: Send + Sync {
    /// All of the user's notes, newest first.
    fn list(
        &self,
        user_id: &UserId,
    ) -> impl std::future::Future<Output = Result<Vec<Note>, RepositoryError>> + Send;

    fn get(
        &self,
        user_id: &UserId,
        id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Option<Note>, RepositoryError>> + Send;

    fn create(
        &self,
        item: &Note,
    ) -> impl std::future::Future<Output = Result<Note, RepositoryError>> + Send;

    /// Overwrite a row matched by id and owner. No match yields `NotFound`.
    fn update(
        &self,
        item: &Note,
    ) -> impl std::future::Future<Output = Result<Note, RepositoryError>> + Send;

    /// No match (including another user's row) yields `NotFound`.
    fn delete(
        &self,
        user_id: &UserId,
        id: &Uuid,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
