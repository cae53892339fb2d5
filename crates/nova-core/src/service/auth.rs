//! Registration and login.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::OnceCell;

use nova_types::error::{RepositoryError, ServiceError};
use nova_types::user::{
    AuthResponse, LoginRequest, RegisterRequest, User, UserId, normalize_email,
};

use crate::auth::credential::{CredentialIssuer, PasswordHasher};
use crate::repository::user::UserRepository;

/// Password checked against when the e-mail is unknown.
const DUMMY_PASSWORD: &str = "nova-dummy-password";

/// Issues credentials for new and returning users.
///
/// Password hashing runs on the blocking pool.
pub struct AuthService<U, H, C>
where
    U: UserRepository,
    H: PasswordHasher + 'static,
    C: CredentialIssuer,
{
    users: U,
    hasher: Arc<H>,
    issuer: Arc<C>,
    dummy_hash: OnceCell<String>,
}

impl<U, H, C> AuthService<U, H, C>
where
    U: UserRepository,
    H: PasswordHasher + 'static,
    C: CredentialIssuer,
{
    pub fn new(users: U, hasher: Arc<H>, issuer: Arc<C>) -> Self {
        Self {
            users,
            hasher,
            issuer,
            dummy_hash: OnceCell::new(),
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, ServiceError> {
        request.validate()?;
        let email = normalize_email(&request.email);

        if self
            .users
            .get_by_email(&email)
            .await
            .map_err(|e| ServiceError::from_repository("user", e))?
            .is_some()
        {
            return Err(ServiceError::Conflict("email already registered".into()));
        }

        let password_hash = self.hash_password(request.password).await?;
        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            email,
            name: request.name.trim().to_string(),
            password_hash,
            avatar: None,
            bio: None,
            created_at: now,
            updated_at: now,
        };

        let user = self.users.create(&user).await.map_err(|e| match e {
            RepositoryError::Conflict(_) => ServiceError::Conflict("email already registered".into()),
            other => ServiceError::from_repository("user", other),
        })?;

        tracing::info!(user_id = %user.id, "Registered user");
        self.respond_with_credential(&user)
    }

    /// Unknown e-mail and wrong password are reported identically, and both
    /// pay for one password verification.
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ServiceError> {
        let email = normalize_email(&request.email);
        let Some(user) = self
            .users
            .get_by_email(&email)
            .await
            .map_err(|e| ServiceError::from_repository("user", e))?
        else {
            let dummy = self
                .dummy_hash
                .get_or_try_init(|| self.hash_password(DUMMY_PASSWORD.to_string()))
                .await?
                .clone();
            let _ = self.verify_password(request.password, dummy).await?;
            return Err(ServiceError::InvalidCredentials);
        };

        if !self
            .verify_password(request.password, user.password_hash.clone())
            .await?
        {
            return Err(ServiceError::InvalidCredentials);
        }

        tracing::debug!(user_id = %user.id, "User logged in");
        self.respond_with_credential(&user)
    }

    fn respond_with_credential(&self, user: &User) -> Result<AuthResponse, ServiceError> {
        let credential = self
            .issuer
            .issue(&user.id)
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        Ok(AuthResponse {
            user: user.summary(),
            token: credential.token,
        })
    }

    async fn hash_password(&self, password: String) -> Result<String, ServiceError> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| ServiceError::Internal(format!("hashing task failed: {e}")))?
            .map_err(|e| ServiceError::Internal(e.to_string()))
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, ServiceError> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| ServiceError::Internal(format!("hashing task failed: {e}")))?
            .map_err(|e| ServiceError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CountingHasher, InMemoryUsers, PlainHasher, StaticIssuer};

    fn service() -> AuthService<InMemoryUsers, PlainHasher, StaticIssuer> {
        AuthService::new(
            InMemoryUsers::default(),
            Arc::new(PlainHasher),
            Arc::new(StaticIssuer),
        )
    }

    fn register_req(email: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.into(),
            password: "hunter22".into(),
            name: "Ada".into(),
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let svc = service();
        let registered = svc.register(register_req("Ada@Example.com")).await.unwrap();
        assert_eq!(registered.user.email, "ada@example.com");
        assert_eq!(registered.token, format!("token-for-{}", registered.user.id));

        let logged_in = svc
            .login(LoginRequest {
                email: "ada@example.com".into(),
                password: "hunter22".into(),
            })
            .await
            .unwrap();
        assert_eq!(logged_in.user.id, registered.user.id);
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let svc = service();
        svc.register(register_req("ada@example.com")).await.unwrap();
        let err = svc.register(register_req("ADA@example.com")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_look_the_same() {
        let svc = service();
        svc.register(register_req("ada@example.com")).await.unwrap();

        let wrong = svc
            .login(LoginRequest {
                email: "ada@example.com".into(),
                password: "nope-nope".into(),
            })
            .await
            .unwrap_err();
        let unknown = svc
            .login(LoginRequest {
                email: "bob@example.com".into(),
                password: "hunter22".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(wrong, ServiceError::InvalidCredentials));
        assert!(matches!(unknown, ServiceError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_unknown_email_still_verifies_a_password() {
        let hasher = Arc::new(CountingHasher::default());
        let svc = AuthService::new(
            InMemoryUsers::default(),
            Arc::clone(&hasher),
            Arc::new(StaticIssuer),
        );

        for _ in 0..2 {
            let err = svc
                .login(LoginRequest {
                    email: "ghost@example.com".into(),
                    password: "hunter22".into(),
                })
                .await
                .unwrap_err();
            assert!(matches!(err, ServiceError::InvalidCredentials));
        }
        assert_eq!(hasher.verifications(), 2);
        assert_eq!(hasher.hashes(), 1);
    }

    #[tokio::test]
    async fn test_invalid_payload_rejected_before_storage() {
        let svc = service();
        let mut req = register_req("ada@example.com");
        req.password = "123".into();
        let err = svc.register(req).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref v) if v.field == "password"));
    }
}
