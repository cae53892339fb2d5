//! SQLite note repository implementation.

use nova_core::repository::note::NoteRepository;
use nova_types::error::RepositoryError;
use nova_types::note::Note;
use nova_types::user::UserId;
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;
use super::{format_datetime, parse_datetime, parse_user_id, parse_uuid, query_error};

pub struct SqliteNoteRepository {
    pool: DatabasePool,
}

impl SqliteNoteRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn note_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Note, RepositoryError> {
    let id: String = row.try_get("id").map_err(query_error)?;
    let user_id: String = row.try_get("user_id").map_err(query_error)?;
    let created_at: String = row.try_get("created_at").map_err(query_error)?;
    let updated_at: String = row.try_get("updated_at").map_err(query_error)?;
    Ok(Note {
        id: parse_uuid(&id)?,
        user_id: parse_user_id(&user_id)?,
        title: row.try_get("title").map_err(query_error)?,
        content: row.try_get("content").map_err(query_error)?,
        color: row.try_get("color").map_err(query_error)?,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

impl NoteRepository for SqliteNoteRepository {
    async fn list(&self, user_id: &UserId) -> Result<Vec<Note>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT * FROM notes WHERE user_id = ? ORDER BY created_at DESC, id DESC",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool.reader)
        .await
        .map_err(query_error)?;
        rows.iter().map(note_from_row).collect()
    }

    async fn get(&self, user_id: &UserId, id: &Uuid) -> Result<Option<Note>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM notes WHERE id = ? AND user_id = ?")
            .bind(id.to_string())
            .bind(user_id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(query_error)?;
        row.as_ref().map(note_from_row).transpose()
    }

    async fn create(&self, item: &Note) -> Result<Note, RepositoryError> {
        sqlx::query(
            "INSERT INTO notes (id, user_id, title, content, color, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(item.id.to_string())
        .bind(item.user_id.to_string())
        .bind(&item.title)
        .bind(&item.content)
        .bind(&item.color)
        .bind(format_datetime(&item.created_at))
        .bind(format_datetime(&item.updated_at))
        .execute(&self.pool.writer)
        .await
        .map_err(query_error)?;
        Ok(item.clone())
    }

    async fn update(&self, item: &Note) -> Result<Note, RepositoryError> {
        let result = sqlx::query(
            "UPDATE notes SET title = ?, content = ?, color = ?, updated_at = ?
             WHERE id = ? AND user_id = ?",
        )
        .bind(&item.title)
        .bind(&item.content)
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
        let result = sqlx::query("DELETE FROM notes WHERE id = ? AND user_id = ?")
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
