use auth::TokenError;
use thiserror::Error;

/// Reasons a request is rejected by the auth guard.
///
/// Callers should report all variants uniformly as "unauthorized"; the
/// distinction exists for logging.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing credential")]
    MissingCredential,

    #[error("invalid token")]
    Invalid,

    #[error("token expired")]
    Expired,

    #[error("subject no longer exists")]
    SubjectMissing,
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => AuthError::Expired,
            TokenError::Invalid(_) | TokenError::IssueFailed(_) => AuthError::Invalid,
        }
    }
}
