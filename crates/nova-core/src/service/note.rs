use std::sync::Arc;

use uuid::Uuid;

use nova_types::analytics::AnalyticsEvent;
use nova_types::error::{RepositoryError, ServiceError};
use nova_types::note::{CreateNoteRequest, Note, UpdateNoteRequest};
use nova_types::user::UserId;

use crate::repository::analytics::AnalyticsRepository;
use crate::repository::note::NoteRepository;
use crate::service::analytics::AnalyticsService;

pub struct NoteService<N: NoteRepository, A: AnalyticsRepository> {
    repo: N,
    analytics: Arc<AnalyticsService<A>>,
}

impl<N: NoteRepository, A: AnalyticsRepository> NoteService<N, A> {
    pub fn new(repo: N, analytics: Arc<AnalyticsService<A>>) -> Self {
        Self { repo, analytics }
    }

    pub async fn list(&self, user_id: &UserId) -> Result<Vec<Note>, ServiceError> {
        self.repo.list(user_id).await.map_err(storage)
    }

    pub async fn create(
        &self,
        user_id: &UserId,
        request: CreateNoteRequest,
    ) -> Result<Note, ServiceError> {
        request.validate()?;
        let note = self
            .repo
            .create(&request.into_note(user_id.clone()))
            .await
            .map_err(storage)?;
        self.analytics.record(user_id, AnalyticsEvent::Note).await;
        Ok(note)
    }

    pub async fn update(
        &self,
        user_id: &UserId,
        id: &Uuid,
        request: UpdateNoteRequest,
    ) -> Result<Note, ServiceError> {
        request.validate()?;
        let mut note = self
            .repo
            .get(user_id, id)
            .await
            .map_err(storage)?
            .ok_or(ServiceError::NotFound("note"))?;
        request.apply(&mut note);
        self.repo.update(&note).await.map_err(storage)
    }

    pub async fn delete(&self, user_id: &UserId, id: &Uuid) -> Result<(), ServiceError> {
        self.repo.delete(user_id, id).await.map_err(storage)
    }
}

fn storage(err: RepositoryError) -> ServiceError {
    ServiceError::from_repository("note", err)
}
