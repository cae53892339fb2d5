//! Analytics repository trait definition.

use chrono::{DateTime, Utc};

use nova_types::analytics::{Analytics, AnalyticsEvent};
use nova_types::error::RepositoryError;
use nova_types::user::UserId;

pub trait AnalyticsRepository: Send + Sync {
    fn get(
        &self,
        user_id: &UserId,
    ) -> impl std::future::Future<Output = Result<Option<Analytics>, RepositoryError>> + Send;

    /// Create the user's row if missing, set `last_active_at = at`, and bump
    /// the counter for `event` when one is given.
    fn track(
        &self,
        user_id: &UserId,
        event: Option<AnalyticsEvent>,
        at: DateTime<Utc>,
    ) -> impl std::future::Future<Output = Result<Analytics, RepositoryError>> + Send;
}
