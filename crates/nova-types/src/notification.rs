use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::user::UserId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub user_id: UserId,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateNotificationRequest {
    pub title: String,
    #[serde(default)]
    pub message: String,
}

impl CreateNotificationRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::new("title", "must not be empty"));
        }
        Ok(())
    }

    pub fn into_notification(self, user_id: UserId) -> Notification {
        Notification {
            id: Uuid::now_v7(),
            user_id,
            title: self.title.trim().to_string(),
            message: self.message,
            read: false,
            created_at: Utc::now(),
        }
    }
}
