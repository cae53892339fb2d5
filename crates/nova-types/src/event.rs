//! Calendar events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::patch::{apply_nullable, deserialize_nullable};
use crate::time::{deserialize_optional_timestamp, deserialize_timestamp};
use crate::user::UserId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: Uuid,
    pub user_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: Option<String>,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CalendarEvent {
    /// Checks the invariants every stored event must satisfy.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::new("title", "must not be empty"));
        }
        if self.end_time < self.start_time {
            return Err(ValidationError::new("endTime", "must not be before startTime"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub start_time: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl CreateEventRequest {
    pub fn into_event(self, user_id: UserId) -> CalendarEvent {
        let now = Utc::now();
        CalendarEvent {
            id: Uuid::now_v7(),
            user_id,
            title: self.title.trim().to_string(),
            description: self.description,
            start_time: self.start_time,
            end_time: self.end_time,
            location: self.location,
            color: self.color,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub location: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub color: Option<Option<String>>,
}

impl UpdateEventRequest {
    /// Apply the patch. The caller re-validates the merged event.
    pub fn apply(self, event: &mut CalendarEvent) {
        if let Some(title) = self.title {
            event.title = title.trim().to_string();
        }
        apply_nullable(self.description, &mut event.description);
        if let Some(start) = self.start_time {
            event.start_time = start;
        }
        if let Some(end) = self.end_time {
            event.end_time = end;
        }
        apply_nullable(self.location, &mut event.location);
        apply_nullable(self.color, &mut event.color);
        event.updated_at = Utc::now();
    }
}
