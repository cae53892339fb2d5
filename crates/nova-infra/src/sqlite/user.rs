//! SQLite user repository implementation.

use nova_core::repository::user::UserRepository;
use nova_types::error::RepositoryError;
use nova_types::user::{User, UserId};
use sqlx::Row;

use super::pool::DatabasePool;
use super::{format_datetime, is_unique_violation, parse_datetime, parse_user_id, query_error};

pub struct SqliteUserRepository {
    pool: DatabasePool,
}

impl SqliteUserRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

struct UserRow {
    id: String,
    email: String,
    name: String,
    password_hash: String,
    avatar: Option<String>,
    bio: Option<String>,
    created_at: String,
    updated_at: String,
}

impl UserRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            email: row.try_get("email")?,
            name: row.try_get("name")?,
            password_hash: row.try_get("password_hash")?,
            avatar: row.try_get("avatar")?,
            bio: row.try_get("bio")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn into_user(self) -> Result<User, RepositoryError> {
        Ok(User {
            id: parse_user_id(&self.id)?,
            email: self.email,
            name: self.name,
            password_hash: self.password_hash,
            avatar: self.avatar,
            bio: self.bio,
            created_at: parse_datetime(&self.created_at)?,
            updated_at: parse_datetime(&self.updated_at)?,
        })
    }
}

fn map_row(row: Option<sqlx::sqlite::SqliteRow>) -> Result<Option<User>, RepositoryError> {
    row.map(|row| UserRow::from_row(&row).map_err(query_error)?.into_user())
        .transpose()
}

impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: &User) -> Result<User, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO users (id, email, name, password_hash, avatar, bio, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.password_hash)
        .bind(&user.avatar)
        .bind(&user.bio)
        .bind(format_datetime(&user.created_at))
        .bind(format_datetime(&user.updated_at))
        .execute(&self.pool.writer)
        .await;

        match result {
            Ok(_) => Ok(user.clone()),
            Err(e) if is_unique_violation(&e) => Err(RepositoryError::Conflict(format!(
                "email '{}' already registered",
                user.email
            ))),
            Err(e) => Err(query_error(e)),
        }
    }

    async fn get_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM users WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(query_error)?;
        map_row(row)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(query_error)?;
        map_row(row)
    }

    async fn update_profile(&self, user: &User) -> Result<User, RepositoryError> {
        let result = sqlx::query(
            "UPDATE users SET name = ?, avatar = ?, bio = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&user.name)
        .bind(&user.avatar)
        .bind(&user.bio)
        .bind(format_datetime(&user.updated_at))
        .bind(user.id.to_string())
        .execute(&self.pool.writer)
        .await
        .map_err(query_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(user.clone())
    }
}
