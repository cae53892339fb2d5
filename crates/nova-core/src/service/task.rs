//! Task management.

use std::sync::Arc;

use uuid::Uuid;

use nova_types::analytics::AnalyticsEvent;
use nova_types::error::ServiceError;
use nova_types::task::{CreateTaskRequest, Task, UpdateTaskRequest};
use nova_types::user::UserId;

use crate::repository::analytics::AnalyticsRepository;
use crate::repository::task::TaskRepository;
use crate::service::analytics::AnalyticsService;

pub struct TaskService<T: TaskRepository, A: AnalyticsRepository> {
    repo: T,
    analytics: Arc<AnalyticsService<A>>,
}

impl<T: TaskRepository, A: AnalyticsRepository> TaskService<T, A> {
    pub fn new(repo: T, analytics: Arc<AnalyticsService<A>>) -> Self {
        Self { repo, analytics }
    }

    pub async fn list(&self, user_id: &UserId) -> Result<Vec<Task>, ServiceError> {
        self.repo.list(user_id).await.map_err(storage)
    }

    pub async fn create(
        &self,
        user_id: &UserId,
        request: CreateTaskRequest,
    ) -> Result<Task, ServiceError> {
        request.validate()?;
        let task = self
            .repo
            .create(&request.into_task(user_id.clone()))
            .await
            .map_err(storage)?;
        self.analytics.record(user_id, AnalyticsEvent::Task).await;
        Ok(task)
    }

    /// Partial update. Completing an open task is recorded as activity.
    pub async fn update(
        &self,
        user_id: &UserId,
        id: &Uuid,
        request: UpdateTaskRequest,
    ) -> Result<Task, ServiceError> {
        request.validate()?;
        let mut task = self
            .repo
            .get(user_id, id)
            .await
            .map_err(storage)?
            .ok_or(ServiceError::NotFound("task"))?;

        let was_completed = task.completed;
        request.apply(&mut task);
        let task = self.repo.update(&task).await.map_err(storage)?;

        if task.completed && !was_completed {
            self.analytics
                .record(user_id, AnalyticsEvent::TaskCompleted)
                .await;
        }
        Ok(task)
    }

    pub async fn delete(&self, user_id: &UserId, id: &Uuid) -> Result<(), ServiceError> {
        self.repo.delete(user_id, id).await.map_err(storage)
    }
}

fn storage(err: nova_types::error::RepositoryError) -> ServiceError {
    ServiceError::from_repository("task", err)
}
