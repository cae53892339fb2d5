use chrono::Utc;

use nova_types::error::ServiceError;
use nova_types::user::{UpdateProfileRequest, UserId, UserProfile};

use crate::repository::user::UserRepository;

pub struct ProfileService<U: UserRepository> {
    users: U,
}

impl<U: UserRepository> ProfileService<U> {
    pub fn new(users: U) -> Self {
        Self { users }
    }

    pub async fn get(&self, user_id: &UserId) -> Result<UserProfile, ServiceError> {
        self.users
            .get_by_id(user_id)
            .await
            .map_err(|e| ServiceError::from_repository("user", e))?
            .map(|user| user.profile())
            .ok_or(ServiceError::NotFound("user"))
    }

    pub async fn update(
        &self,
        user_id: &UserId,
        request: UpdateProfileRequest,
    ) -> Result<UserProfile, ServiceError> {
        request.validate()?;
        let mut user = self
            .users
            .get_by_id(user_id)
            .await
            .map_err(|e| ServiceError::from_repository("user", e))?
            .ok_or(ServiceError::NotFound("user"))?;

        if let Some(name) = request.name {
            user.name = name.trim().to_string();
        }
        if request.bio.is_some() {
            user.bio = request.bio;
        }
        if request.avatar.is_some() {
            user.avatar = request.avatar;
        }
        user.updated_at = Utc::now();

        let user = self
            .users
            .update_profile(&user)
            .await
            .map_err(|e| ServiceError::from_repository("user", e))?;
        Ok(user.profile())
    }
}
