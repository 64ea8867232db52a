use thiserror::Error;

/// Error type for bearer token issuance and validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to issue token: {0}")]
    IssueFailed(String),

    #[error("Token is invalid: {0}")]
    Invalid(String),

    #[error("Token is expired")]
    Expired,
}
