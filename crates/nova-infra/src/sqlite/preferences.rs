//! SQLite preferences repository implementation.

use nova_core::repository::preferences::PreferencesRepository;
use nova_types::error::RepositoryError;
use nova_types::preferences::{Theme, UserPreferences};
use nova_types::user::UserId;
use sqlx::Row;

use super::pool::DatabasePool;
use super::{format_datetime, parse_datetime, parse_user_id, parse_uuid, query_error};

pub struct SqlitePreferencesRepository {
    pool: DatabasePool,
}

impl SqlitePreferencesRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn prefs_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<UserPreferences, RepositoryError> {
    let id: String = row.try_get("id").map_err(query_error)?;
    let user_id: String = row.try_get("user_id").map_err(query_error)?;
    let theme: String = row.try_get("theme").map_err(query_error)?;
    let created_at: String = row.try_get("created_at").map_err(query_error)?;
    let updated_at: String = row.try_get("updated_at").map_err(query_error)?;
    Ok(UserPreferences {
        id: parse_uuid(&id)?,
        user_id: parse_user_id(&user_id)?,
        theme: theme.parse::<Theme>().map_err(RepositoryError::Query)?,
        language: row.try_get("language").map_err(query_error)?,
        notifications: row.try_get("notifications").map_err(query_error)?,
        email_digest: row.try_get("email_digest").map_err(query_error)?,
        timezone: row.try_get("timezone").map_err(query_error)?,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

impl PreferencesRepository for SqlitePreferencesRepository {
    async fn get(&self, user_id: &UserId) -> Result<Option<UserPreferences>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM user_preferences WHERE user_id = ?")
            .bind(user_id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(query_error)?;
        row.as_ref().map(prefs_from_row).transpose()
    }

    async fn upsert(&self, prefs: &UserPreferences) -> Result<UserPreferences, RepositoryError> {
        // On conflict the existing row keeps its id and created_at.
        let row = sqlx::query(
            "INSERT INTO user_preferences (id, user_id, theme, language, notifications, email_digest, timezone, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(user_id) DO UPDATE SET
                theme = excluded.theme,
                language = excluded.language,
                notifications = excluded.notifications,
                email_digest = excluded.email_digest,
                timezone = excluded.timezone,
                updated_at = excluded.updated_at
             RETURNING *",
        )
        .bind(prefs.id.to_string())
        .bind(prefs.user_id.to_string())
        .bind(prefs.theme.to_string())
        .bind(&prefs.language)
        .bind(prefs.notifications)
        .bind(prefs.email_digest)
        .bind(&prefs.timezone)
        .bind(format_datetime(&prefs.created_at))
        .bind(format_datetime(&prefs.updated_at))
        .fetch_one(&self.pool.writer)
        .await
        .map_err(query_error)?;
        prefs_from_row(&row)
    }
}
