use uuid::Uuid;

use nova_types::error::{RepositoryError, ServiceError};
use nova_types::notification::{CreateNotificationRequest, Notification};
use nova_types::user::UserId;

use crate::repository::notification::NotificationRepository;

pub struct NotificationService<N: NotificationRepository> {
    repo: N,
}

impl<N: NotificationRepository> NotificationService<N> {
    pub fn new(repo: N) -> Self {
        Self { repo }
    }

    pub async fn list(&self, user_id: &UserId) -> Result<Vec<Notification>, ServiceError> {
        self.repo.list(user_id).await.map_err(storage)
    }

    pub async fn create(
        &self,
        user_id: &UserId,
        request: CreateNotificationRequest,
    ) -> Result<Notification, ServiceError> {
        request.validate()?;
        self.repo
            .create(&request.into_notification(user_id.clone()))
            .await
            .map_err(storage)
    }

    pub async fn mark_read(&self, user_id: &UserId, id: &Uuid) -> Result<Notification, ServiceError> {
        self.repo.mark_read(user_id, id).await.map_err(storage)
    }

    pub async fn delete(&self, user_id: &UserId, id: &Uuid) -> Result<(), ServiceError> {
        self.repo.delete(user_id, id).await.map_err(storage)
    }
}

fn storage(err: RepositoryError) -> ServiceError {
    ServiceError::from_repository("notification", err)
}
