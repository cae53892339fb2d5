//! SQLite analytics repository implementation.

use chrono::{DateTime, Utc};
use nova_core::repository::analytics::AnalyticsRepository;
use nova_types::analytics::{Analytics, AnalyticsEvent};
use nova_types::error::RepositoryError;
use nova_types::user::UserId;
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;
use super::{
    format_datetime, parse_datetime, parse_optional_datetime, parse_user_id, parse_uuid,
    query_error,
};

pub struct SqliteAnalyticsRepository {
    pool: DatabasePool,
}

impl SqliteAnalyticsRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn analytics_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Analytics, RepositoryError> {
    let id: String = row.try_get("id").map_err(query_error)?;
    let user_id: String = row.try_get("user_id").map_err(query_error)?;
    let last_active_at: Option<String> = row.try_get("last_active_at").map_err(query_error)?;
    let created_at: String = row.try_get("created_at").map_err(query_error)?;
    let updated_at: String = row.try_get("updated_at").map_err(query_error)?;
    Ok(Analytics {
        id: parse_uuid(&id)?,
        user_id: parse_user_id(&user_id)?,
        total_chats: row.try_get("total_chats").map_err(query_error)?,
        total_tasks: row.try_get("total_tasks").map_err(query_error)?,
        completed_tasks: row.try_get("completed_tasks").map_err(query_error)?,
        total_notes: row.try_get("total_notes").map_err(query_error)?,
        total_events: row.try_get("total_events").map_err(query_error)?,
        last_active_at: parse_optional_datetime(last_active_at)?,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

impl AnalyticsRepository for SqliteAnalyticsRepository {
    async fn get(&self, user_id: &UserId) -> Result<Option<Analytics>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM analytics WHERE user_id = ?")
            .bind(user_id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(query_error)?;
        row.as_ref().map(analytics_from_row).transpose()
    }

    async fn track(
        &self,
        user_id: &UserId,
        event: Option<AnalyticsEvent>,
        at: DateTime<Utc>,
    ) -> Result<Analytics, RepositoryError> {
        let at = format_datetime(&at);
        let mut tx = self.pool.writer.begin().await.map_err(query_error)?;

        sqlx::query(
            "INSERT INTO analytics (id, user_id, created_at, updated_at) VALUES (?, ?, ?, ?)
             ON CONFLICT(user_id) DO NOTHING",
        )
        .bind(Uuid::now_v7().to_string())
        .bind(user_id.to_string())
        .bind(&at)
        .bind(&at)
        .execute(&mut *tx)
        .await
        .map_err(query_error)?;

        // Column names come from a closed enum, never from input.
        let bump = event
            .map(|e| format!(", {col} = {col} + 1", col = e.counter_column()))
            .unwrap_or_default();
        let sql = format!(
            "UPDATE analytics SET last_active_at = ?, updated_at = ?{bump} WHERE user_id = ? RETURNING *"
        );
        let row = sqlx::query(&sql)
            .bind(&at)
            .bind(&at)
            .bind(user_id.to_string())
            .fetch_one(&mut *tx)
            .await
            .map_err(query_error)?;

        tx.commit().await.map_err(query_error)?;
        analytics_from_row(&row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::test_support::{seed_user, test_pool};

    #[tokio::test]
    async fn test_track_creates_and_increments() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "ada@example.com").await;
        let repo = SqliteAnalyticsRepository::new(pool);

        assert!(repo.get(&user).await.unwrap().is_none());

        repo.track(&user, Some(AnalyticsEvent::Chat), Utc::now()).await.unwrap();
        repo.track(&user, Some(AnalyticsEvent::Chat), Utc::now()).await.unwrap();
        let row = repo
            .track(&user, Some(AnalyticsEvent::TaskCompleted), Utc::now())
            .await
            .unwrap();

        assert_eq!(row.total_chats, 2);
        assert_eq!(row.completed_tasks, 1);
        assert_eq!(row.total_tasks, 0);
        assert!(row.last_active_at.is_some());
    }

    #[tokio::test]
    async fn test_track_without_event_only_refreshes_activity() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "ada@example.com").await;
        let repo = SqliteAnalyticsRepository::new(pool);

        let row = repo.track(&user, None, Utc::now()).await.unwrap();
        assert_eq!(row.total_chats + row.total_notes + row.total_events, 0);
        assert!(row.last_active_at.is_some());
    }
}
