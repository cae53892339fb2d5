//! SQLite notification repository implementation.

use nova_core::repository::notification::NotificationRepository;
use nova_types::error::RepositoryError;
use nova_types::notification::Notification;
use nova_types::user::UserId;
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;
use super::{format_datetime, parse_datetime, parse_user_id, parse_uuid, query_error};

pub struct SqliteNotificationRepository {
    pool: DatabasePool,
}

impl SqliteNotificationRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn notification_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Notification, RepositoryError> {
    let id: String = row.try_get("id").map_err(query_error)?;
    let user_id: String = row.try_get("user_id").map_err(query_error)?;
    let created_at: String = row.try_get("created_at").map_err(query_error)?;
    Ok(Notification {
        id: parse_uuid(&id)?,
        user_id: parse_user_id(&user_id)?,
        title: row.try_get("title").map_err(query_error)?,
        message: row.try_get("message").map_err(query_error)?,
        read: row.try_get("read").map_err(query_error)?,
        created_at: parse_datetime(&created_at)?,
    })
}

impl NotificationRepository for SqliteNotificationRepository {
    async fn list(&self, user_id: &UserId) -> Result<Vec<Notification>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT * FROM notifications WHERE user_id = ? ORDER BY created_at DESC, id DESC",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool.reader)
        .await
        .map_err(query_error)?;
        rows.iter().map(notification_from_row).collect()
    }

    async fn create(&self, notification: &Notification) -> Result<Notification, RepositoryError> {
        sqlx::query(
            "INSERT INTO notifications (id, user_id, title, message, read, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(notification.id.to_string())
        .bind(notification.user_id.to_string())
        .bind(&notification.title)
        .bind(&notification.message)
        .bind(notification.read)
        .bind(format_datetime(&notification.created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(query_error)?;
        Ok(notification.clone())
    }

    async fn mark_read(&self, user_id: &UserId, id: &Uuid) -> Result<Notification, RepositoryError> {
        let row = sqlx::query(
            "UPDATE notifications SET read = 1 WHERE id = ? AND user_id = ? RETURNING *",
        )
        .bind(id.to_string())
        .bind(user_id.to_string())
        .fetch_optional(&self.pool.writer)
        .await
        .map_err(query_error)?;

        match row {
            Some(row) => notification_from_row(&row),
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn delete(&self, user_id: &UserId, id: &Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = ? AND user_id = ?")
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
    use nova_types::notification::CreateNotificationRequest;

    #[tokio::test]
    async fn test_mark_read() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "ada@example.com").await;
        let other = seed_user(&pool, "bob@example.com").await;
        let repo = SqliteNotificationRepository::new(pool);

        let n = CreateNotificationRequest {
            title: "Reminder".into(),
            message: "Drink water".into(),
        }
        .into_notification(user.clone());
        repo.create(&n).await.unwrap();

        assert!(matches!(
            repo.mark_read(&other, &n.id).await,
            Err(RepositoryError::NotFound)
        ));

        let updated = repo.mark_read(&user, &n.id).await.unwrap();
        assert!(updated.read);
        assert!(repo.list(&user).await.unwrap()[0].read);
    }
}
