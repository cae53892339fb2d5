//! HS256 JWT codec implementing the credential ports.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use nova_core::auth::credential::{CredentialIssuer, CredentialVerifier, IssuedCredential};
use nova_types::error::CredentialError;
use nova_types::user::UserId;

/// Registered claims carried by a Nova credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signs and verifies bearer credentials with a shared secret.
pub struct JwtCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl JwtCodec {
    pub fn new(secret: &SecretString, ttl: Duration) -> Self {
        let key = secret.expose_secret().as_bytes();
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        Self {
            encoding: EncodingKey::from_secret(key),
            decoding: DecodingKey::from_secret(key),
            validation,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a credential as if it had been signed at `issued_at`.
    pub fn issue_at(
        &self,
        user_id: &UserId,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedCredential, CredentialError> {
        let expires_at = issued_at
            .checked_add_signed(self.ttl)
            .ok_or_else(|| CredentialError::Signing("credential expiry out of range".into()))?;
        let claims = Claims {
            sub: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| CredentialError::Signing(e.to_string()))?;
        Ok(IssuedCredential { token, expires_at })
    }
}

impl CredentialIssuer for JwtCodec {
    fn issue(&self, user_id: &UserId) -> Result<IssuedCredential, CredentialError> {
        self.issue_at(user_id, Utc::now())
    }
}

impl CredentialVerifier for JwtCodec {
    fn verify(&self, token: &str) -> Result<UserId, CredentialError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => CredentialError::Expired,
                ErrorKind::InvalidSignature => CredentialError::InvalidSignature,
                _ => CredentialError::Malformed(e.to_string()),
            }
        })?;

        data.claims
            .sub
            .parse::<UserId>()
            .map_err(|_| CredentialError::InvalidSubject(data.claims.sub.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec(secret: &str) -> JwtCodec {
        JwtCodec::new(&SecretString::from(secret.to_string()), Duration::days(7))
    }

    #[test]
    fn test_issue_then_verify() {
        let codec = codec("test-secret");
        let user = UserId::new();
        let issued = codec.issue(&user).unwrap();
        assert_eq!(codec.verify(&issued.token).unwrap(), user);
        assert!(issued.expires_at > Utc::now() + Duration::days(6));
    }

    #[test]
    fn test_unrepresentable_expiry_is_an_error() {
        let codec = JwtCodec::new(&SecretString::from("s".to_string()), Duration::MAX);
        assert!(matches!(
            codec.issue(&UserId::new()),
            Err(CredentialError::Signing(_))
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let codec = codec("test-secret");
        let issued = codec
            .issue_at(&UserId::new(), Utc::now() - Duration::days(8))
            .unwrap();
        assert!(matches!(
            codec.verify(&issued.token),
            Err(CredentialError::Expired)
        ));
    }

    #[test]
    fn test_foreign_signature_rejected() {
        let theirs = codec("someone-else").issue(&UserId::new()).unwrap();
        assert!(matches!(
            codec("test-secret").verify(&theirs.token),
            Err(CredentialError::InvalidSignature)
        ));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(
            codec("test-secret").verify("not.a.jwt"),
            Err(CredentialError::Malformed(_))
        ));
    }

    #[test]
    fn test_non_uuid_subject_rejected() {
        let codec = codec("test-secret");
        let now = Utc::now();
        let claims = Claims {
            sub: "admin".into(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(1)).timestamp(),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &codec.encoding).unwrap();
        assert!(matches!(
            codec.verify(&token),
            Err(CredentialError::InvalidSubject(_))
        ));
    }
}
