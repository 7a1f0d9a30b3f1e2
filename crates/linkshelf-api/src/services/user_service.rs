//! User lookups.

use std::sync::Arc;

use linkshelf_core::{Result, User, UserRepository};
use uuid::Uuid;

/// Thin service over a [`UserRepository`].
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Find a user, `None` when the ID is unknown.
    pub async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
        self.users.find_by_id(id).await
    }
}
