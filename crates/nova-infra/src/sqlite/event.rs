//! SQLite calendar event repository implementation.

use nova_core::repository::event::EventRepository;
use nova_types::error::RepositoryError;
use nova_types::event::CalendarEvent;
use nova_types::user::UserId;
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;
use super::{format_datetime, parse_datetime, parse_user_id, parse_uuid, query_error};

pub struct SqliteEventRepository {
    pool: DatabasePool,
}

impl SqliteEventRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

struct EventRow {
    id: String,
    user_id: String,
    title: String,
    description: Option<String>,
    start_time: String,
    end_time: String,
    location: Option<String>,
    color: Option<String>,
    created_at: String,
    updated_at: String,
}

impl EventRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            start_time: row.try_get("start_time")?,
            end_time: row.try_get("end_time")?,
            location: row.try_get("location")?,
            color: row.try_get("color")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn into_event(self) -> Result<CalendarEvent, RepositoryError> {
        Ok(CalendarEvent {
            id: parse_uuid(&self.id)?,
            user_id: parse_user_id(&self.user_id)?,
            title: self.title,
            description: self.description,
            start_time: parse_datetime(&self.start_time)?,
            end_time: parse_datetime(&self.end_time)?,
            location: self.location,
            color: self.color,
            created_at: parse_datetime(&self.created_at)?,
            updated_at: parse_datetime(&self.updated_at)?,
        })
    }
}

fn to_event(row: &sqlx::sqlite::SqliteRow) -> Result<CalendarEvent, RepositoryError> {
    EventRow::from_row(row).map_err(query_error)?.into_event()
}

impl EventRepository for SqliteEventRepository {
    async fn list(&self, user_id: &UserId) -> Result<Vec<CalendarEvent>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT * FROM calendar_events WHERE user_id = ? ORDER BY start_time ASC, id ASC",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool.reader)
        .await
        .map_err(query_error)?;
        rows.iter().map(to_event).collect()
    }

    async fn get(
        &self,
        user_id: &UserId,
        id: &Uuid,
    ) -> Result<Option<CalendarEvent>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM calendar_events WHERE id = ? AND user_id = ?")
            .bind(id.to_string())
            .bind(user_id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(query_error)?;
        row.as_ref().map(to_event).transpose()
    }

    async fn create(&self, item: &CalendarEvent) -> Result<CalendarEvent, RepositoryError> {
        sqlx::query(
            "INSERT INTO calendar_events (id, user_id, title, description, start_time, end_time, location, color, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(item.id.to_string())
        .bind(item.user_id.to_string())
        .bind(&item.title)
        .bind(&item.description)
        .bind(format_datetime(&item.start_time))
        .bind(format_datetime(&item.end_time))
        .bind(&item.location)
        .bind(&item.color)
        .bind(format_datetime(&item.created_at))
        .bind(format_datetime(&item.updated_at))
        .execute(&self.pool.writer)
        .await
        .map_err(query_error)?;
        Ok(item.clone())
    }

    async fn update(&self, item: &CalendarEvent) -> Result<CalendarEvent, RepositoryError> {
        let result = sqlx::query(
            "UPDATE calendar_events
             SET title = ?, description = ?, start_time = ?, end_time = ?, location = ?, color = ?, updated_at = ?
             WHERE id = ? AND user_id = ?",
        )
        .bind(&item.title)
        .bind(&item.description)
        .bind(format_datetime(&item.start_time))
        .bind(format_datetime(&item.end_time))
        .bind(&item.location)
        .bind(&item.color)
        .bind(format_datetime(&item.updated_at))
        .bind(item.id.to_string())
        .bind(item.user_id.to_string())
        .execute(&self.pool.writer)
        .await
        .map_err(query_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(item.clone())
    }

    async fn delete(&self, user_id: &UserId, id: &Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM calendar_events WHERE id = ? AND user_id = ?")
            .bind(id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool.writer)
            .await
            .map_err(query_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::test_support::{seed_user, test_pool};
    use chrono::{Duration, Utc};

    fn make_event(user: &UserId, title: &str, starts_in_hours: i64) -> CalendarEvent {
        let now = Utc::now();
        let start = now + Duration::hours(starts_in_hours);
        CalendarEvent {
            id: Uuid::now_v7(),
            user_id: user.clone(),
            title: title.into(),
            description: None,
            start_time: start,
            end_time: start + Duration::minutes(30),
            location: Some("Room 1".into()),
            color: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_list_orders_by_start_time() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "ada@example.com").await;
        let repo = SqliteEventRepository::new(pool);

        repo.create(&make_event(&user, "later", 5)).await.unwrap();
        repo.create(&make_event(&user, "sooner", 1)).await.unwrap();

        let titles: Vec<String> = repo
            .list(&user)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["sooner", "later"]);
    }

    #[tokio::test]
    async fn test_update_scoped_by_owner() {
        let pool = test_pool().await;
        let owner = seed_user(&pool, "owner@example.com").await;
        let other = seed_user(&pool, "other@example.com").await;
        let repo = SqliteEventRepository::new(pool);

        let mut event = make_event(&owner, "Standup", 1);
        repo.create(&event).await.unwrap();

        event.location = Some("Room 2".into());
        repo.update(&event).await.unwrap();
        let found = repo.get(&owner, &event.id).await.unwrap().unwrap();
        assert_eq!(found.location.as_deref(), Some("Room 2"));

        assert!(repo.get(&other, &event.id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(&other, &event.id).await,
            Err(RepositoryError::NotFound)
        ));
    }
}
