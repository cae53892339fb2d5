//! The authentication gate.
//!
//! Resolves the `Authorization` header of a protected request to a
//! [`UserId`]. Every failure (no header, wrong scheme, bad signature,
//! expiry, garbage subject) yields the same [`AuthError::Unauthorized`];
//! the precise reason is only logged.

use nova_types::error::AuthError;
use nova_types::user::UserId;

use super::credential::CredentialVerifier;

const BEARER_SCHEME: &str = "bearer";

/// Extract the token from a `Bearer <token>` header value.
///
/// The scheme is matched case-insensitively. An empty token is treated as absent.
pub fn bearer_token(header: Option<&str>) -> Option<&str> {
    let (scheme, token) = header?.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Resolve a header value to a user identity.
pub fn authenticate<V>(header: Option<&str>, verifier: &V) -> Result<UserId, AuthError>
where
    V: CredentialVerifier + ?Sized,
{
    let Some(token) = bearer_token(header) else {
        tracing::debug!("Rejected request: missing bearer credential");
        return Err(AuthError::Unauthorized);
    };

    verifier.verify(token).map_err(|err| {
        tracing::debug!(error = %err, "Rejected request: invalid credential");
        AuthError::Unauthorized
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nova_types::error::CredentialError;

    /// Accepts exactly one token string.
    struct FixedVerifier {
        token: &'static str,
        user: UserId,
    }

    impl CredentialVerifier for FixedVerifier {
        fn verify(&self, token: &str) -> Result<UserId, CredentialError> {
            match token {
                t if t == self.token => Ok(self.user.clone()),
                "expired" => Err(CredentialError::Expired),
                _ => Err(CredentialError::InvalidSignature),
            }
        }
    }

    fn verifier() -> FixedVerifier {
        FixedVerifier {
            token: "good-token",
            user: UserId::new(),
        }
    }

    #[test]
    fn test_bearer_token_extraction() {
        assert_eq!(bearer_token(Some("Bearer abc")), Some("abc"));
        assert_eq!(bearer_token(Some("bearer   abc ")), Some("abc"));
        assert_eq!(bearer_token(Some("Basic abc")), None);
        assert_eq!(bearer_token(Some("Bearer")), None);
        assert_eq!(bearer_token(Some("Bearer  ")), None);
        assert_eq!(bearer_token(None), None);
    }

    #[test]
    fn test_valid_token_resolves_user() {
        let v = verifier();
        let user = authenticate(Some("Bearer good-token"), &v).unwrap();
        assert_eq!(user, v.user);
    }

    #[test]
    fn test_all_failures_are_indistinguishable() {
        let v = verifier();
        let missing = authenticate(None, &v).unwrap_err();
        let expired = authenticate(Some("Bearer expired"), &v).unwrap_err();
        let forged = authenticate(Some("Bearer forged"), &v).unwrap_err();
        let wrong_scheme = authenticate(Some("Token good-token"), &v).unwrap_err();
        assert_eq!(missing, expired);
        assert_eq!(expired, forged);
        assert_eq!(forged, wrong_scheme);
    }

    #[test]
    fn test_gate_is_idempotent() {
        let v = verifier();
        let first = authenticate(Some("Bearer good-token"), &v).unwrap();
        let second = authenticate(Some("Bearer good-token"), &v).unwrap();
        assert_eq!(first, second);
    }
}
