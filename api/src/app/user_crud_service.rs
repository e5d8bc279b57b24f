//! User CRUD service
//!
//! Lookup and deletion of users.

use std::sync::Arc;

use crate::domain::entities::{User, UserId};
use crate::domain::ports::UserRepository;
use crate::error::DomainError;

/// Service for managing users
pub struct UserCrudService<UR>
where
    UR: UserRepository + ?Sized,
{
    users: Arc<UR>,
}

impl<UR> UserCrudService<UR>
where
    UR: UserRepository + ?Sized,
{
    pub fn new(users: Arc<UR>) -> Self {
        Self { users }
    }

    /// Get a single user
    pub async fn show_by_id(&self, id: UserId) -> Result<User, DomainError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or(DomainError::UserNotFound(id))
    }

    /// Delete a user
    pub async fn delete_by(&self, id: UserId) -> Result<(), DomainError> {
        if !self.users.exists_by_id(id).await? {
            return Err(DomainError::UserNotFound(id));
        }

        self.users.delete_by_id(id).await?;

        tracing::info!(user_id = %id, "Deleted user");
        Ok(())
    }
}
