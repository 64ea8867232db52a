use std::sync::Arc;

use auth::TokenService;

use crate::domain::access::errors::AuthError;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;

/// Resolves the caller identity behind a bearer token.
///
/// Each call walks `Unauthenticated -> TokenPresented -> Authenticated | Rejected`
/// from scratch; outcomes are never cached between requests.
pub struct AuthGuard<UR>
where
    UR: UserRepository,
{
    token_service: Arc<TokenService>,
    users: Arc<UR>,
}

impl<UR> AuthGuard<UR>
where
    UR: UserRepository,
{
    pub fn new(token_service: Arc<TokenService>, users: Arc<UR>) -> Self {
        Self {
            token_service,
            users,
        }
    }

    /// Authenticate a request from its raw bearer token.
    ///
    /// A valid token is not enough: the subject must still be a registered user.
    ///
    /// # Errors
    /// * `MissingCredential` - No token was presented
    /// * `Invalid` - Token is malformed or its signature does not verify
    /// * `Expired` - Token is past its expiration
    /// * `SubjectMissing` - Token is valid but its subject is unknown
    pub fn authenticate(&self, token: Option<&str>) -> Result<User, AuthError> {
        let token = token.ok_or(AuthError::MissingCredential)?;

        let subject = self.token_service.validate(token)?;

        self.users
            .find_by_email(&subject)
            .ok_or(AuthError::SubjectMissing)
    }
}
