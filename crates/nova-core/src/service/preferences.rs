use nova_types::error::ServiceError;
use nova_types::preferences::{UpdatePreferencesRequest, UserPreferences};
use nova_types::user::UserId;

use crate::repository::preferences::PreferencesRepository;

pub struct PreferencesService<P: PreferencesRepository> {
    repo: P,
}

impl<P: PreferencesRepository> PreferencesService<P> {
    pub fn new(repo: P) -> Self {
        Self { repo }
    }

    /// The stored row, or `None` if the user never saved preferences.
    pub async fn get(&self, user_id: &UserId) -> Result<Option<UserPreferences>, ServiceError> {
        self.repo
            .get(user_id)
            .await
            .map_err(|e| ServiceError::from_repository("preferences", e))
    }

    /// Merge the patch over the stored row (or the defaults) and save it.
    pub async fn update(
        &self,
        user_id: &UserId,
        request: UpdatePreferencesRequest,
    ) -> Result<UserPreferences, ServiceError> {
        let mut prefs = self
            .get(user_id)
            .await?
            .unwrap_or_else(|| UserPreferences::defaults_for(user_id.clone()));
        request.apply(&mut prefs);
        self.repo
            .upsert(&prefs)
            .await
            .map_err(|e| ServiceError::from_repository("preferences", e))
    }
}
