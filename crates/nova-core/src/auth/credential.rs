//! Credential issuance/verification and password hashing ports.
//!
//! Implementations live in nova-infra (`JwtCodec`, `BcryptHasher`).

use chrono::{DateTime, Utc};

use nova_types::error::CredentialError;
use nova_types::user::UserId;

/// A freshly signed bearer credential.
#[derive(Debug, Clone)]
pub struct IssuedCredential {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

pub trait CredentialIssuer: Send + Sync {
    fn issue(&self, user_id: &UserId) -> Result<IssuedCredential, CredentialError>;
}

/// Stateless verification: must not touch any store.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<UserId, CredentialError>;
}

/// One-way password hashing. Both operations are CPU-bound and are run
/// off the async executor by the auth service.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, CredentialError>;

    fn verify(&self, password: &str, hash: &str) -> Result<bool, CredentialError>;
}
