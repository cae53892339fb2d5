//! Usage analytics.

use chrono::Utc;

use nova_types::analytics::{Analytics, AnalyticsEvent, TrackEventRequest};
use nova_types::error::ServiceError;
use nova_types::user::UserId;

use crate::repository::analytics::AnalyticsRepository;

pub struct AnalyticsService<A: AnalyticsRepository> {
    repo: A,
}

impl<A: AnalyticsRepository> AnalyticsService<A> {
    pub fn new(repo: A) -> Self {
        Self { repo }
    }

    pub async fn get(&self, user_id: &UserId) -> Result<Option<Analytics>, ServiceError> {
        self.repo
            .get(user_id)
            .await
            .map_err(|e| ServiceError::from_repository("analytics", e))
    }

    /// Handle an explicit client `track` call.
    pub async fn track(
        &self,
        user_id: &UserId,
        request: TrackEventRequest,
    ) -> Result<Analytics, ServiceError> {
        let event = request.counted_event();
        if event.is_none() {
            tracing::debug!(event = %request.event, "Untracked analytics event, refreshing activity only");
        }
        self.repo
            .track(user_id, event, Utc::now())
            .await
            .map_err(|e| ServiceError::from_repository("analytics", e))
    }

    /// Record server-side activity. Failures are logged, never returned.
    pub async fn record(&self, user_id: &UserId, event: AnalyticsEvent) {
        if let Err(err) = self.repo.track(user_id, Some(event), Utc::now()).await {
            tracing::warn!(user_id = %user_id, event = %event, error = %err, "Failed to record activity");
        }
    }
}
