//! Per-user usage counters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::user::UserId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub id: Uuid,
    pub user_id: UserId,
    pub total_chats: i64,
    pub total_tasks: i64,
    pub completed_tasks: i64,
    pub total_notes: i64,
    pub total_events: i64,
    pub last_active_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Events that bump a counter. Anything else only refreshes `lastActiveAt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyticsEvent {
    Chat,
    Task,
    TaskCompleted,
    Note,
    Event,
}

impl AnalyticsEvent {
    /// Column holding this event's counter.
    pub fn counter_column(self) -> &'static str {
        match self {
            AnalyticsEvent::Chat => "total_chats",
            AnalyticsEvent::Task => "total_tasks",
            AnalyticsEvent::TaskCompleted => "completed_tasks",
            AnalyticsEvent::Note => "total_notes",
            AnalyticsEvent::Event => "total_events",
        }
    }
}

impl fmt::Display for AnalyticsEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyticsEvent::Chat => write!(f, "chat"),
            AnalyticsEvent::Task => write!(f, "task"),
            AnalyticsEvent::TaskCompleted => write!(f, "task_completed"),
            AnalyticsEvent::Note => write!(f, "note"),
            AnalyticsEvent::Event => write!(f, "event"),
        }
    }
}

impl FromStr for AnalyticsEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chat" => Ok(AnalyticsEvent::Chat),
            "task" => Ok(AnalyticsEvent::Task),
            "task_completed" => Ok(AnalyticsEvent::TaskCompleted),
            "note" => Ok(AnalyticsEvent::Note),
            "event" => Ok(AnalyticsEvent::Event),
            other => Err(format!("untracked analytics event: '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackEventRequest {
    pub event: String,
    /// Accepted for client compatibility; not stored.
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl TrackEventRequest {
    /// The counter to bump, if the event name is one that is counted.
    pub fn counted_event(&self) -> Option<AnalyticsEvent> {
        self.event.parse().ok()
    }
}
