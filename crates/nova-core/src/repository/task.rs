//! Task repository trait definition.

use uuid::Uuid;

use nova_types::error::RepositoryError;
use nova_types::task::Task;
use nova_types::user::UserId;

pub trait TaskRepository: Send + Sync {
    /// All of the user's tasks, newest first.
    fn list(
        &self,
        user_id: &UserId,
    ) -> impl std::future::Future<Output = Result<Vec<Task>, RepositoryError>> + Send;

    fn get(
        &self,
        user_id: &UserId,
        id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Option<Task>, RepositoryError>> + Send;

    fn create(
        &self,
        item: &Task,
    ) -> impl std::future::Future<Output = Result<Task, RepositoryError>> + Send;

    /// Overwrite a row matched by id and owner. No match yields `NotFound`.
    fn update(
        &self,
        item: &Task,
    ) -> impl std::future::Future<Output = Result<Task, RepositoryError>> + Send;

    /// No match (including another user's row) yields `NotFound`.
    fn delete(
        &self,
        user_id: &UserId,
        id: &Uuid,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
