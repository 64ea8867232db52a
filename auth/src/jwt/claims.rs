use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Bearer token claims.
///
/// Carries the authenticated subject together with the issue and
/// expiration instants as Unix timestamps (RFC 7519 `sub`, `iat`, `exp`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (the account email)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject valid for `ttl` from `issued_at`.
    ///
    /// # Arguments
    /// * `subject` - Identity the token proves
    /// * `issued_at` - Issue instant
    /// * `ttl` - Lifetime of the token
    ///
    /// # Errors
    /// * `ExpirationOutOfRange` - `issued_at + ttl` is not a representable instant
    pub fn for_subject(
        subject: impl ToString,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, JwtError> {
        let expiration = issued_at
            .checked_add_signed(ttl)
            .ok_or(JwtError::ExpirationOutOfRange)?;

        Ok(Self {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
        })
    }

    /// Check if token is expired.
    ///
    /// A token is only valid while `exp` lies strictly in the future.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}
