use std::sync::Arc;

use chrono::Duration;

use super::errors::TokenError;
use crate::clock::Clock;
use crate::clock::SystemClock;
use crate::jwt::Claims;
use crate::jwt::JwtHandler;

/// Issues and validates signed, time-limited bearer tokens.
///
/// Tokens are stateless: validity depends only on the signature, the
/// embedded expiration and the current time. There is no way to revoke a
/// token before it expires.
pub struct TokenService {
    jwt_handler: JwtHandler,
    clock: Arc<dyn Clock>,
    default_ttl: Duration,
}

impl TokenService {
    /// Create a token service using the system clock.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    /// * `default_ttl` - Lifetime used by `issue_default`
    pub fn new(secret: &[u8], default_ttl: Duration) -> Self {
        Self::with_clock(secret, default_ttl, Arc::new(SystemClock))
    }

    /// Create a token service reading time from `clock`.
    pub fn with_clock(secret: &[u8], default_ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            jwt_handler: JwtHandler::new(secret),
            clock,
            default_ttl,
        }
    }

    /// Issue a token for `subject` expiring `ttl` from now.
    ///
    /// # Errors
    /// * `IssueFailed` - Expiration is out of range or token signing failed
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<String, TokenError> {
        let claims = Claims::for_subject(subject, self.clock.now(), ttl)
            .map_err(|e| TokenError::IssueFailed(e.to_string()))?;

        self.jwt_handler
            .encode(&claims)
            .map_err(|e| TokenError::IssueFailed(e.to_string()))
    }

    /// Issue a token for `subject` with the default lifetime.
    ///
    /// # Errors
    /// * `IssueFailed` - Expiration is out of range or token signing failed
    pub fn issue_default(&self, subject: &str) -> Result<String, TokenError> {
        self.issue(subject, self.default_ttl)
    }

    /// Validate a token and return the subject it proves.
    ///
    /// # Errors
    /// * `Invalid` - Token is malformed, unsigned, tampered with or lacks claims
    /// * `Expired` - Signature is valid but the token is past its expiration
    pub fn validate(&self, token: &str) -> Result<String, TokenError> {
        let claims: Claims = self
            .jwt_handler
            .decode(token)
            .map_err(|e| TokenError::Invalid(e.to_string()))?;

        if claims.is_expired(self.clock.now().timestamp()) {
            return Err(TokenError::Expired);
        }

        if claims.sub.is_empty() {
            return Err(TokenError::Invalid("empty subject".to_string()));
        }

        Ok(claims.sub)
    }
}
