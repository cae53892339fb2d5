//! SQLite tag repository implementation.

use nova_core::repository::tag::TagRepository;
use nova_types::error::RepositoryError;
use nova_types::tag::Tag;
use nova_types::user::UserId;
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;
use super::{
    format_datetime, is_unique_violation, parse_datetime, parse_user_id, parse_uuid, query_error,
};

pub struct SqliteTagRepository {
    pool: DatabasePool,
}

impl SqliteTagRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn tag_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Tag, RepositoryError> {
    let id: String = row.try_get("id").map_err(query_error)?;
    let user_id: String = row.try_get("user_id").map_err(query_error)?;
    let created_at: String = row.try_get("created_at").map_err(query_error)?;
    Ok(Tag {
        id: parse_uuid(&id)?,
        user_id: parse_user_id(&user_id)?,
        name: row.try_get("name").map_err(query_error)?,
        color: row.try_get("color").map_err(query_error)?,
        created_at: parse_datetime(&created_at)?,
    })
}

impl TagRepository for SqliteTagRepository {
    async fn list(&self, user_id: &UserId) -> Result<Vec<Tag>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM tags WHERE user_id = ? ORDER BY name COLLATE NOCASE")
            .bind(user_id.to_string())
            .fetch_all(&self.pool.reader)
            .await
            .map_err(query_error)?;
        rows.iter().map(tag_from_row).collect()
    }

    async fn create(&self, tag: &Tag) -> Result<Tag, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO tags (id, user_id, name, color, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(tag.id.to_string())
        .bind(tag.user_id.to_string())
        .bind(&tag.name)
        .bind(&tag.color)
        .bind(format_datetime(&tag.created_at))
        .execute(&self.pool.writer)
        .await;

        match result {
            Ok(_) => Ok(tag.clone()),
            Err(e) if is_unique_violation(&e) => Err(RepositoryError::Conflict(format!(
                "tag '{}' already exists",
                tag.name
            ))),
            Err(e) => Err(query_error(e)),
        }
    }

    async fn delete(&self, user_id: &UserId, id: &Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM tags WHERE id = ? AND user_id = ?")
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
    use nova_types::tag::CreateTagRequest;

    fn make_tag(user: &UserId, name: &str) -> Tag {
        CreateTagRequest {
            name: name.into(),
            color: None,
        }
        .into_tag(user.clone())
    }

    #[tokio::test]
    async fn test_duplicate_name_per_user_conflicts() {
        let pool = test_pool().await;
        let alice = seed_user(&pool, "alice@example.com").await;
        let bob = seed_user(&pool, "bob@example.com").await;
        let repo = SqliteTagRepository::new(pool);

        repo.create(&make_tag(&alice, "work")).await.unwrap();
        let err = repo.create(&make_tag(&alice, "work")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));

        // Same name for another user is fine.
        repo.create(&make_tag(&bob, "work")).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_alphabetical_and_delete() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "ada@example.com").await;
        let repo = SqliteTagRepository::new(pool);

        let zeta = make_tag(&user, "zeta");
        repo.create(&zeta).await.unwrap();
        repo.create(&make_tag(&user, "Alpha")).await.unwrap();

        let names: Vec<String> = repo.list(&user).await.unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Alpha", "zeta"]);

        repo.delete(&user, &zeta.id).await.unwrap();
        assert_eq!(repo.list(&user).await.unwrap().len(), 1);
    }
}
