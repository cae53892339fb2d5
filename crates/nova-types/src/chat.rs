//! Conversation turns between a user and the Nova assistant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::user::UserId;

// Re-export MessageRole from llm module (it's used in both chat and llm contexts).
pub use crate::llm::MessageRole;

/// Number of turns returned by the history endpoint.
pub const CHAT_HISTORY_LIMIT: u32 = 50;

/// One persisted conversation turn. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: Uuid,
    pub user_id: UserId,
    pub content: String,
    pub role: MessageRole,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(user_id: UserId, role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            user_id,
            content: content.into(),
            role,
            timestamp: Utc::now(),
        }
    }
}

impl From<&ChatMessage> for crate::llm::Message {
    fn from(turn: &ChatMessage) -> Self {
        crate::llm::Message {
            role: turn.role,
            content: turn.content.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostChatRequest {
    pub content: String,
    #[serde(default)]
    pub role: Option<MessageRole>,
}

impl PostChatRequest {
    /// Validated role and trimmed content.
    pub fn validate(&self) -> Result<(MessageRole, &str), ValidationError> {
        let content = self.content.trim();
        if content.is_empty() {
            return Err(ValidationError::new("content", "must not be empty"));
        }
        match self.role.unwrap_or(MessageRole::User) {
            MessageRole::System => Err(ValidationError::new(
                "role",
                "must be 'user' or 'assistant'",
            )),
            role => Ok((role, content)),
        }
    }
}

/// A user turn together with the assistant reply generated for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatExchange {
    pub user_message: ChatMessage,
    pub ai_message: ChatMessage,
}

/// Result of posting a turn: a full exchange for user turns, the stored turn
/// on its own for assistant turns.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PostChatResponse {
    Exchange(ChatExchange),
    Single(ChatMessage),
}
