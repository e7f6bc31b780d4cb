//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserId, UserMutation, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository.
///
/// All access goes through a single lock; `modify` holds the write lock for
/// the whole read-modify-write.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a repository with initial users
    pub fn with_users(users: Vec<User>) -> Self {
        let users_map = users.into_iter().map(|u| (*u.id(), u)).collect();

        Self {
            users: Arc::new(RwLock::new(users_map)),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(id: &UserId) -> DomainError {
    DomainError::not_found(format!("User '{}' not found", id))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn put(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        users.insert(*user.id(), user.clone());
        Ok(user)
    }

    async fn get(&self, id: &UserId) -> Result<User, DomainError> {
        let users = self.users.read().await;
        users.get(id).cloned().ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: &UserId) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        users.remove(id).map(|_| ()).ok_or_else(|| not_found(id))
    }

    async fn modify(&self, id: &UserId, mutation: UserMutation) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        let current = users.get(id).ok_or_else(|| not_found(id))?;

        // Mutate a copy so a rejected change leaves the stored record intact
        let mut updated = current.clone();
        mutation(&mut updated)?;

        if updated.id() != id {
            return Err(DomainError::internal(format!(
                "Mutation changed the ID of user '{}'",
                id
            )));
        }

        users.insert(*id, updated.clone());
        Ok(updated)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let users = self.users.read().await;
        Ok(users.len())
    }
}
