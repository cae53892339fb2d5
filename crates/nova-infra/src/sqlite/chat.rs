//! SQLite chat message repository implementation.

use nova_core::repository::chat::ChatRepository;
use nova_types::chat::{ChatMessage, MessageRole};
use nova_types::error::RepositoryError;
use nova_types::user::UserId;
use sqlx::Row;

use super::pool::DatabasePool;
use super::{format_datetime, parse_datetime, parse_user_id, parse_uuid, query_error};

pub struct SqliteChatRepository {
    pool: DatabasePool,
}

impl SqliteChatRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn message_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<ChatMessage, RepositoryError> {
    let id: String = row.try_get("id").map_err(query_error)?;
    let user_id: String = row.try_get("user_id").map_err(query_error)?;
    let role: String = row.try_get("role").map_err(query_error)?;
    let timestamp: String = row.try_get("timestamp").map_err(query_error)?;

    Ok(ChatMessage {
        id: parse_uuid(&id)?,
        user_id: parse_user_id(&user_id)?,
        content: row.try_get("content").map_err(query_error)?,
        role: role
            .parse::<MessageRole>()
            .map_err(RepositoryError::Query)?,
        timestamp: parse_datetime(&timestamp)?,
    })
}

impl ChatRepository for SqliteChatRepository {
    async fn save_message(&self, message: &ChatMessage) -> Result<ChatMessage, RepositoryError> {
        sqlx::query(
            "INSERT INTO chat_messages (id, user_id, role, content, timestamp) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(message.id.to_string())
        .bind(message.user_id.to_string())
        .bind(message.role.to_string())
        .bind(&message.content)
        .bind(format_datetime(&message.timestamp))
        .execute(&self.pool.writer)
        .await
        .map_err(query_error)?;
        Ok(message.clone())
    }

    async fn recent_messages(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<ChatMessage>, RepositoryError> {
        // Newest N, then flipped so callers get chronological order.
        let rows = sqlx::query(
            "SELECT * FROM chat_messages WHERE user_id = ?
             ORDER BY timestamp DESC, id DESC LIMIT ?",
        )
        .bind(user_id.to_string())
        .bind(i64::from(limit))
        .fetch_all(&self.pool.reader)
        .await
        .map_err(query_error)?;

        let mut messages = rows
            .iter()
            .map(message_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        messages.reverse();
        Ok(messages)
    }

    async fn clear(&self, user_id: &UserId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM chat_messages WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(&self.pool.writer)
            .await
            .map_err(query_error)?;
        Ok(result.rows_affected())
    }
}
