//! bcrypt password hashing.

use nova_core::auth::credential::PasswordHasher;
use nova_types::error::CredentialError;

/// Work factor used for new hashes.
pub const DEFAULT_BCRYPT_COST: u32 = 10;

pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str) -> Result<String, CredentialError> {
        bcrypt::hash(password, self.cost).map_err(|e| CredentialError::Hashing(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, CredentialError> {
        bcrypt::verify(password, hash).map_err(|e| CredentialError::Hashing(e.to_string()))
    }
}
