//! Preferences repository trait definition.

use nova_types::error::RepositoryError;
use nova_types::preferences::UserPreferences;
use nova_types::user::UserId;

pub trait PreferencesRepository: Send + Sync {
    fn get(
        &self,
        user_id: &UserId,
    ) -> impl std::future::Future<Output = Result<Option<UserPreferences>, RepositoryError>> + Send;

    /// Insert, or replace the settings of the user's existing row.
    fn upsert(
        &self,
        prefs: &UserPreferences,
    ) -> impl std::future::Future<Output = Result<UserPreferences, RepositoryError>> + Send;
}
