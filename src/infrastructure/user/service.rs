//! User service implementing the create/read/update/delete use cases

use std::sync::Arc;

use tracing::{debug, info};
use validator::Validate;

use crate::domain::user::{non_blank, NewUser, User, UserId, UserRepository, UserUpdate};
use crate::domain::DomainError;

/// User service orchestrating validation, identifier assignment and storage
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a new user with a generated ID
    pub async fn create(&self, input: NewUser) -> Result<User, DomainError> {
        input.validate()?;

        let user = User::new(UserId::generate(), input);
        let user = self.repository.put(user).await?;

        info!(user_id = %user.id(), "User created");
        Ok(user)
    }

    /// Get a user by ID
    pub async fn get(&self, id: &str) -> Result<User, DomainError> {
        let user_id = UserId::parse(id)?;
        debug!(user_id = %user_id, "Fetching user");

        self.repository.get(&user_id).await
    }

    /// Apply a partial update.
    ///
    /// Non-blank fields overwrite the stored values; `updated_at` is set even
    /// when nothing else changes. The merged record must satisfy the same
    /// rules as a new user; a violating update is rejected and nothing is stored.
    pub async fn update(&self, id: &str, update: UserUpdate) -> Result<User, DomainError> {
        let user_id = UserId::parse(id)?;

        let user = self
            .repository
            .modify(
                &user_id,
                Box::new(move |user: &mut User| -> Result<(), DomainError> {
                    if let Some(name) = non_blank(update.name.as_deref()) {
                        user.set_name(name);
                    }

                    if let Some(address) = non_blank(update.address.as_deref()) {
                        user.set_address(address);
                    }

                    user.touch();
                    user.validate()?;
                    Ok(())
                }),
            )
            .await?;

        info!(user_id = %user_id, "User updated");
        Ok(user)
    }

    /// Delete a user
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let user_id = UserId::parse(id)?;

        self.repository.delete(&user_id).await?;

        info!(user_id = %user_id, "User deleted");
        Ok(())
    }

    /// Number of stored users
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }
}
