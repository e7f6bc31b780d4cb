//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

#[cfg(test)]
use mockall::automock;

use super::entity::{User, UserId};
use crate::domain::DomainError;

/// Change applied to a stored user by [`UserRepository::modify`].
///
/// Returning an error aborts the change; the stored record stays as it was.
pub type UserMutation = Box<dyn FnOnce(&mut User) -> Result<(), DomainError> + Send>;

/// Repository trait for user storage
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Insert or overwrite the user stored under its ID
    async fn put(&self, user: User) -> Result<User, DomainError>;

    /// Get a user by ID, failing with `NotFound` when absent
    async fn get(&self, id: &UserId) -> Result<User, DomainError>;

    /// Delete a user by ID, failing with `NotFound` when absent
    async fn delete(&self, id: &UserId) -> Result<(), DomainError>;

    /// Atomically read, change and store a user.
    ///
    /// No other operation on the same store observes the record between the
    /// read and the write.
    async fn modify(&self, id: &UserId, mutation: UserMutation) -> Result<User, DomainError>;

    /// Number of stored users
    async fn count(&self) -> Result<usize, DomainError>;

    /// Check if a user ID exists
    async fn exists(&self, id: &UserId) -> Result<bool, DomainError> {
        match self.get(id).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }
}
