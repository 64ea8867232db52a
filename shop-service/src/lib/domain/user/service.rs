use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::user::models::AccessToken;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for registration and login.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User storage implementation
    /// * `authenticator` - Password hashing and token issuance
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        let password_hash = self
            .authenticator
            .hash_password(command.password.as_str())
            .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))?;

        let user = User {
            username: command.username,
            email: command.email,
            password_hash,
        };

        let registered = self.repository.create(user)?;

        tracing::info!(
            username = %registered.username,
            email = %registered.email,
            "User registered"
        );

        Ok(registered)
    }

    async fn login(&self, email: &str, password: &str) -> Result<AccessToken, UserError> {
        let user = self.repository.find_by_email(email).ok_or_else(|| {
            tracing::debug!(email = %email, "Login attempt for unknown email");
            UserError::InvalidCredentials
        })?;

        let result = self
            .authenticator
            .authenticate(password, &user.password_hash, user.email.as_str())
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::debug!(email = %email, "Login attempt with wrong password");
                    UserError::InvalidCredentials
                }
                AuthenticationError::TokenError(err) => UserError::Token(err.to_string()),
            })?;

        tracing::info!(email = %user.email, "User logged in");

        Ok(AccessToken {
            access_token: result.access_token,
            token_type: result.token_type.to_string(),
        })
    }
}
