use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::patch::{apply_nullable, deserialize_nullable};
use crate::user::UserId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub user_id: UserId,
    pub title: String,
    pub content: String,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub color: Option<String>,
}

impl CreateNoteRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::new("title", "must not be empty"));
        }
        Ok(())
    }

    pub fn into_note(self, user_id: UserId) -> Note {
        let now = Utc::now();
        Note {
            id: Uuid::now_v7(),
            user_id,
            title: self.title.trim().to_string(),
            content: self.content,
            color: self.color,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNoteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub color: Option<Option<String>>,
}

impl UpdateNoteRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.title {
            Some(title) if title.trim().is_empty() => {
                Err(ValidationError::new("title", "must not be empty"))
            }
            _ => Ok(()),
        }
    }

    pub fn apply(self, note: &mut Note) {
        if let Some(title) = self.title {
            note.title = title.trim().to_string();
        }
        if let Some(content) = self.content {
            note.content = content;
        }
        apply_nullable(self.color, &mut note.color);
        note.updated_at = Utc::now();
    }
}
