//! Calendar event management.

use std::sync::Arc;

use uuid::Uuid;

use nova_types::analytics::AnalyticsEvent;
use nova_types::error::{RepositoryError, ServiceError};
use nova_types::event::{CalendarEvent, CreateEventRequest, UpdateEventRequest};
use nova_types::user::UserId;

use crate::repository::analytics::AnalyticsRepository;
use crate::repository::event::EventRepository;
use crate::service::analytics::AnalyticsService;

pub struct EventService<E: EventRepository, A: AnalyticsRepository> {
    repo: E,
    analytics: Arc<AnalyticsService<A>>,
}

impl<E: EventRepository, A: AnalyticsRepository> EventService<E, A> {
    pub fn new(repo: E, analytics: Arc<AnalyticsService<A>>) -> Self {
        Self { repo, analytics }
    }

    pub async fn list(&self, user_id: &UserId) -> Result<Vec<CalendarEvent>, ServiceError> {
        self.repo.list(user_id).await.map_err(storage)
    }

    pub async fn create(
        &self,
        user_id: &UserId,
        request: CreateEventRequest,
    ) -> Result<CalendarEvent, ServiceError> {
        let event = request.into_event(user_id.clone());
        event.validate()?;
        let event = self.repo.create(&event).await.map_err(storage)?;
        self.analytics.record(user_id, AnalyticsEvent::Event).await;
        Ok(event)
    }

    /// The merged event must still satisfy `end_time >= start_time`.
    pub async fn update(
        &self,
        user_id: &UserId,
        id: &Uuid,
        request: UpdateEventRequest,
    ) -> Result<CalendarEvent, ServiceError> {
        let mut event = self
            .repo
            .get(user_id, id)
            .await
            .map_err(storage)?
            .ok_or(ServiceError::NotFound("event"))?;
        request.apply(&mut event);
        event.validate()?;
        self.repo.update(&event).await.map_err(storage)
    }

    pub async fn delete(&self, user_id: &UserId, id: &Uuid) -> Result<(), ServiceError> {
        self.repo.delete(user_id, id).await.map_err(storage)
    }
}

fn storage(err: RepositoryError) -> ServiceError {
    ServiceError::from_repository("event", err)
}
