use uuid::Uuid;

use nova_types::error::{RepositoryError, ServiceError};
use nova_types::tag::{CreateTagRequest, Tag};
use nova_types::user::UserId;

use crate::repository::tag::TagRepository;

pub struct TagService<T: TagRepository> {
    repo: T,
}

impl<T: TagRepository> TagService<T> {
    pub fn new(repo: T) -> Self {
        Self { repo }
    }

    pub async fn list(&self, user_id: &UserId) -> Result<Vec<Tag>, ServiceError> {
        self.repo
            .list(user_id)
            .await
            .map_err(|e| ServiceError::from_repository("tag", e))
    }

    pub async fn create(
        &self,
        user_id: &UserId,
        request: CreateTagRequest,
    ) -> Result<Tag, ServiceError> {
        request.validate()?;
        let tag = request.into_tag(user_id.clone());
        self.repo.create(&tag).await.map_err(|e| match e {
            RepositoryError::Conflict(_) => {
                ServiceError::Conflict(format!("tag '{}' already exists", tag.name))
            }
            other => ServiceError::from_repository("tag", other),
        })
    }

    pub async fn delete(&self, user_id: &UserId, id: &Uuid) -> Result<(), ServiceError> {
        self.repo
            .delete(user_id, id)
            .await
            .map_err(|e| ServiceError::from_repository("tag", e))
    }
}
