use std::collections::hash_map::Entry;
use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// In-memory user store keyed by email.
///
/// Duplicate emails are rejected: the uniqueness check and the insert run
/// under one write lock.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write();

        match users.entry(user.email.as_str().to_string()) {
            Entry::Occupied(entry) => Err(UserError::EmailAlreadyExists(entry.key().clone())),
            Entry::Vacant(entry) => Ok(entry.insert(user).clone()),
        }
    }

    fn find_by_email(&self, email: &str) -> Option<User> {
        self.users.read().get(email).cloned()
    }
}
