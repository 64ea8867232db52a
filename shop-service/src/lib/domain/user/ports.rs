use async_trait::async_trait;

use crate::domain::user::models::AccessToken;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user with validated credentials.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username, email, and password
    ///
    /// # Returns
    /// Registered user entity
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Unknown` - Password hashing failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Verify credentials and issue a bearer token.
    ///
    /// # Arguments
    /// * `email` - Email the account was registered with (exact match)
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Access token and its type
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `Token` - Token issuance failed
    async fn login(&self, email: &str, password: &str) -> Result<AccessToken, UserError>;
}

/// Storage operations for registered users.
///
/// Implementations serialize writes so concurrent registrations never
/// corrupt the collection.
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - A user with the same email is already stored
    fn create(&self, user: User) -> Result<User, UserError>;

    /// Look up a user by exact, case-sensitive email.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    fn find_by_email(&self, email: &str) -> Option<User>;
}
