//! Calendar event repository trait definition.

use uuid::Uuid;

use nova_types::error::RepositoryError;
use nova_types::event::CalendarEvent;
use nova_types::user::UserId;

pub trait EventRepository: Send + Sync {
    /// All of the user's events, earliest start first.
    fn list(
        &self,
        user_id: &UserId,
    ) -> impl std::future::Future<Output = Result<Vec<CalendarEvent>, RepositoryError>> + Send;

    fn get(
        &self,
        user_id: &UserId,
        id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Option<CalendarEvent>, RepositoryError>> + Send;

    fn create(
        &self,
        item: &CalendarEvent,
    ) -> impl std::future::Future<Output = Result<CalendarEvent, RepositoryError>> + Send;

    /// Overwrite a row matched by id and owner. No match yields `NotFound`.
    fn update(
        &self,
        item: &CalendarEvent,
    ) -> impl std::future::Future<Output = Result<CalendarEvent, RepositoryError>> + Send;

    /// No match (including another user's row) yields `NotFound`.
    fn delete(
        &self,
        user_id: &UserId,
        id: &Uuid,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
