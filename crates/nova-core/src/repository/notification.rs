//! Notification repository trait definition.

use uuid::Uuid;

use nova_types::error::RepositoryError;
use nova_types::notification::Notification;
use nova_types::user::UserId;

pub trait NotificationRepository: Send + Sync {
    /// Newest first.
    fn list(
        &self,
        user_id: &UserId,
    ) -> impl std::future::Future<Output = Result<Vec<Notification>, RepositoryError>> + Send;

    fn create(
        &self,
        notification: &Notification,
    ) -> impl std::future::Future<Output = Result<Notification, RepositoryError>> + Send;

    /// Flag as read and return the updated row.
    fn mark_read(
        &self,
        user_id: &UserId,
        id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Notification, RepositoryError>> + Send;

    fn delete(
        &self,
        user_id: &UserId,
        id: &Uuid,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
