use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::patch::{apply_nullable, deserialize_nullable};
use crate::time::{deserialize_nullable_timestamp, deserialize_optional_timestamp};
use crate::user::UserId;

/// Task urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskPriority::Low => write!(f, "low"),
            TaskPriority::Medium => write!(f, "medium"),
            TaskPriority::High => write!(f, "high"),
        }
    }
}

impl FromStr for TaskPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(TaskPriority::Low),
            "medium" => Ok(TaskPriority::Medium),
            "high" => Ok(TaskPriority::High),
            other => Err(format!("invalid task priority: '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub user_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub due_date: Option<DateTime<Utc>>,
    pub priority: TaskPriority,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    #[serde(default)]
    pub category: Option<String>,
}

impl CreateTaskRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::new("title", "must not be empty"));
        }
        Ok(())
    }

    pub fn into_task(self, user_id: UserId) -> Task {
        let now = Utc::now();
        Task {
            id: Uuid::now_v7(),
            user_id,
            title: self.title.trim().to_string(),
            description: self.description,
            completed: false,
            due_date: self.due_date,
            priority: self.priority.unwrap_or_default(),
            category: self.category,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_nullable_timestamp")]
    pub due_date: Option<Option<DateTime<Utc>>>,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub category: Option<Option<String>>,
}

impl UpdateTaskRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.title {
            Some(title) if title.trim().is_empty() => {
                Err(ValidationError::new("title", "must not be empty"))
            }
            _ => Ok(()),
        }
    }

    /// Apply the patch to `task`, bumping `updated_at`.
    pub fn apply(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title.trim().to_string();
        }
        apply_nullable(self.description, &mut task.description);
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        apply_nullable(self.due_date, &mut task.due_date);
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        apply_nullable(self.category, &mut task.category);
        task.updated_at = Utc::now();
    }
}
