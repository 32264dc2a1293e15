use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, instrument};

use super::domain::{Claims, Identity};
use super::errors::AuthError;

pub const TOKEN_COOKIE: &str = "token";
const MAX_TTL_SECS: i64 = 365 * 24 * 3600;

/// Issues and verifies HS256 tokens. Nothing is stored server side; a token
/// is valid while its signature checks out and `exp` is in the future.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl: Duration::seconds(i64::try_from(ttl_secs).unwrap_or(MAX_TTL_SECS).min(MAX_TTL_SECS)),
        }
    }

    /// Sign a token for `identity`, valid for one TTL from now.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{domain::Identity, TokenService};
    /// let tokens = TokenService::new("secret", 3600);
    /// let token = tokens.issue(&Identity { email: "a@x.com".into() }).unwrap();
    /// assert_eq!(tokens.verify(&token).unwrap().email, "a@x.com");
    /// ```
    pub fn issue(&self, identity: &Identity) -> Result<String, AuthError> {
        self.issue_at(identity, Utc::now())
    }

    #[instrument(skip(self, identity), fields(email = %identity.email))]
    pub fn issue_at(&self, identity: &Identity, issued_at: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = Claims {
            email: identity.email.clone(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::TokenError(e.to_string()))?;
        debug!(exp = claims.exp, "token_issued");
        Ok(token)
    }

    pub fn verify(&self, token: &str) -> Result<Identity, AuthError> {
        match decode::<Claims>(token, &self.decoding, &self.validation) {
            Ok(data) => Ok(Identity { email: data.claims.email }),
            Err(e) => {
                let reason = match e.kind() {
                    ErrorKind::ExpiredSignature => "token expired",
                    ErrorKind::InvalidSignature => "bad signature",
                    _ => "malformed token",
                };
                Err(AuthError::Unauthenticated(reason.to_string()))
            }
        }
    }

    /// Verify an optional cookie value; absence counts as unauthenticated.
    pub fn verify_cookie(&self, token: Option<&str>) -> Result<Identity, AuthError> {
        match token.filter(|t| !t.is_empty()) {
            Some(t) => self.verify(t),
            None => Err(AuthError::Unauthenticated("missing token".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(email: &str) -> Identity {
        Identity { email: email.into() }
    }

    #[test]
    fn issue_then_verify_recovers_email_within_window() {
        let tokens = TokenService::new("test-secret", 3600);
        let issued = Utc::now() - Duration::minutes(59);
        let token = tokens.issue_at(&identity("a@x.com"), issued).unwrap();
        assert_eq!(tokens.verify(&token).unwrap(), identity("a@x.com"));
    }

    #[test]
    fn expired_token_is_unauthenticated() {
        let tokens = TokenService::new("test-secret", 3600);
        let issued = Utc::now() - Duration::hours(2);
        let token = tokens.issue_at(&identity("a@x.com"), issued).unwrap();
        let err = tokens.verify(&token).unwrap_err();
        assert!(matches!(err, AuthError::Unauthenticated(ref m) if m == "token expired"));
        assert_eq!(err.code(), 1004);
    }

    #[test]
    fn wrong_secret_and_garbage_are_rejected() {
        let issuer = TokenService::new("secret-a", 3600);
        let verifier = TokenService::new("secret-b", 3600);
        let token = issuer.issue(&identity("a@x.com")).unwrap();
        assert!(matches!(verifier.verify(&token), Err(AuthError::Unauthenticated(_))));
        assert!(matches!(verifier.verify("not.a.jwt"), Err(AuthError::Unauthenticated(_))));
    }

    #[test]
    fn missing_cookie_is_unauthenticated() {
        let tokens = TokenService::new("test-secret", 3600);
        assert!(matches!(tokens.verify_cookie(None), Err(AuthError::Unauthenticated(_))));
        assert!(matches!(tokens.verify_cookie(Some("")), Err(AuthError::Unauthenticated(_))));
    }

    #[test]
    fn claims_carry_one_ttl() {
        let tokens = TokenService::new("test-secret", 3600);
        let issued = Utc::now();
        let token = tokens.issue_at(&identity("a@x.com"), issued).unwrap();
        let mut no_exp = Validation::new(Algorithm::HS256);
        no_exp.validate_exp = false;
        let data = decode::<Claims>(&token, &DecodingKey::from_secret(b"test-secret"), &no_exp).unwrap();
        assert_eq!(data.claims.exp - data.claims.iat, 3600);
        assert_eq!(data.claims.iat, issued.timestamp());
    }
}
