//! SQLite task repository implementation.

use nova_core::repository::task::TaskRepository;
use nova_types::error::RepositoryError;
use nova_types::task::{Task, TaskPriority};
use nova_types::user::UserId;
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;
use super::{
    format_datetime, parse_datetime, parse_optional_datetime, parse_user_id, parse_uuid,
    query_error,
};

pub struct SqliteTaskRepository {
    pool: DatabasePool,
}

impl SqliteTaskRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

struct TaskRow {
    id: String,
    user_id: String,
    title: String,
    description: Option<String>,
    completed: bool,
    due_date: Option<String>,
    priority: String,
    category: Option<String>,
    created_at: String,
    updated_at: String,
}

impl TaskRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            completed: row.try_get("completed")?,
            due_date: row.try_get("due_date")?,
            priority: row.try_get("priority")?,
            category: row.try_get("category")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn into_task(self) -> Result<Task, RepositoryError> {
        Ok(Task {
            id: parse_uuid(&self.id)?,
            user_id: parse_user_id(&self.user_id)?,
            title: self.title,
            description: self.description,
            completed: self.completed,
            due_date: parse_optional_datetime(self.due_date)?,
            priority: self
                .priority
                .parse::<TaskPriority>()
                .map_err(RepositoryError::Query)?,
            category: self.category,
            created_at: parse_datetime(&self.created_at)?,
            updated_at: parse_datetime(&self.updated_at)?,
        })
    }
}

fn to_task(row: &sqlx::sqlite::SqliteRow) -> Result<Task, RepositoryError> {
    TaskRow::from_row(row).map_err(query_error)?.into_task()
}

impl TaskRepository for SqliteTaskRepository {
    async fn list(&self, user_id: &UserId) -> Result<Vec<Task>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT * FROM tasks WHERE user_id = ? ORDER BY created_at DESC, id DESC",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool.reader)
        .await
        .map_err(query_error)?;
        rows.iter().map(to_task).collect()
    }

    async fn get(&self, user_id: &UserId, id: &Uuid) -> Result<Option<Task>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM tasks WHERE id = ? AND user_id = ?")
            .bind(id.to_string())
            .bind(user_id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(query_error)?;
        row.as_ref().map(to_task).transpose()
    }

    async fn create(&self, item: &Task) -> Result<Task, RepositoryError> {
        sqlx::query(
            "INSERT INTO tasks (id, user_id, title, description, completed, due_date, priority, category, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(item.id.to_string())
        .bind(item.user_id.to_string())
        .bind(&item.title)
        .bind(&item.description)
        .bind(item.completed)
        .bind(item.due_date.as_ref().map(format_datetime))
        .bind(item.priority.to_string())
        .bind(&item.category)
        .bind(format_datetime(&item.created_at))
        .bind(format_datetime(&item.updated_at))
        .execute(&self.pool.writer)
        .await
        .map_err(query_error)?;
        Ok(item.clone())
    }

    async fn update(&self, item: &Task) -> Result<Task, RepositoryError> {
        let result = sqlx::query(
            "UPDATE tasks SET title = ?, description = ?, completed = ?, due_date = ?, priority = ?, category = ?, updated_at = ?
             WHERE id = ? AND user_id = ?",
        )
        .bind(&item.title)
        .bind(&item.description)
        .bind(item.completed)
        .bind(item.due_date.as_ref().map(format_datetime))
        .bind(item.priority.to_string())
        .bind(&item.category)
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
        let result = sqlx::query("DELETE FROM tasks WHERE id = ? AND user_id = ?")
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
    use chrono::{Duration, TimeZone, Utc};
    use nova_types::task::CreateTaskRequest;

    fn make_task(user: &UserId, title: &str) -> Task {
        CreateTaskRequest {
            title: title.into(),
            description: Some("details".into()),
            due_date: Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()),
            priority: Some(TaskPriority::High),
            category: Some("work".into()),
        }
        .into_task(user.clone())
    }

    #[tokio::test]
    async fn test_create_get_roundtrip() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "ada@example.com").await;
        let repo = SqliteTaskRepository::new(pool);

        let task = make_task(&user, "Ship");
        repo.create(&task).await.unwrap();
        let found = repo.get(&user, &task.id).await.unwrap().unwrap();
        assert_eq!(found.title, "Ship");
        assert_eq!(found.priority, TaskPriority::High);
        assert_eq!(found.due_date, task.due_date);
        assert!(!found.completed);
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "ada@example.com").await;
        let repo = SqliteTaskRepository::new(pool);

        let mut older = make_task(&user, "older");
        older.created_at = Utc::now() - Duration::hours(1);
        repo.create(&older).await.unwrap();
        repo.create(&make_task(&user, "newer")).await.unwrap();

        let titles: Vec<String> = repo
            .list(&user)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["newer", "older"]);
    }

    #[tokio::test]
    async fn test_foreign_rows_are_invisible() {
        let pool = test_pool().await;
        let owner = seed_user(&pool, "owner@example.com").await;
        let other = seed_user(&pool, "other@example.com").await;
        let repo = SqliteTaskRepository::new(pool);

        let task = make_task(&owner, "mine");
        repo.create(&task).await.unwrap();

        assert!(repo.get(&other, &task.id).await.unwrap().is_none());
        assert!(repo.list(&other).await.unwrap().is_empty());
        assert!(matches!(
            repo.delete(&other, &task.id).await,
            Err(RepositoryError::NotFound)
        ));

        let mut hijack = task.clone();
        hijack.user_id = other.clone();
        hijack.title = "stolen".into();
        assert!(matches!(
            repo.update(&hijack).await,
            Err(RepositoryError::NotFound)
        ));
        assert_eq!(repo.get(&owner, &task.id).await.unwrap().unwrap().title, "mine");
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "ada@example.com").await;
        let repo = SqliteTaskRepository::new(pool);

        let mut task = make_task(&user, "draft");
        repo.create(&task).await.unwrap();
        task.completed = true;
        repo.update(&task).await.unwrap();
        assert!(repo.get(&user, &task.id).await.unwrap().unwrap().completed);

        repo.delete(&user, &task.id).await.unwrap();
        assert!(repo.get(&user, &task.id).await.unwrap().is_none());
    }
}
