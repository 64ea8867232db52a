//! Authentication utilities library
//!
//! Provides the credential and token infrastructure of the shop service:
//! - Password hashing (Argon2id)
//! - Signed, time-limited bearer tokens (HS256 JWT)
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::TokenService;
//! use chrono::Duration;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", Duration::minutes(30));
//! let token = tokens.issue_default("alice@example.com").unwrap();
//! assert_eq!(tokens.validate(&token).unwrap(), "alice@example.com");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use std::sync::Arc;
//!
//! use auth::{Authenticator, TokenService};
//! use chrono::Duration;
//!
//! let tokens = Arc::new(TokenService::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     Duration::minutes(30),
//! ));
//! let auth = Authenticator::new(Arc::clone(&tokens));
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let result = auth.authenticate("password123", &hash, "alice@example.com").unwrap();
//!
//! // Validate token
//! let subject = tokens.validate(&result.access_token).unwrap();
//! assert_eq!(subject, "alice@example.com");
//! ```

pub mod authenticator;
pub mod clock;
pub mod jwt;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authenticator::BEARER_TOKEN_TYPE;
pub use clock::Clock;
pub use clock::ManualClock;
pub use clock::SystemClock;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::TokenError;
pub use token::TokenService;
