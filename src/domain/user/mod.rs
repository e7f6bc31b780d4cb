//! User domain
//!
//! This module provides the user record, its creation and partial-update
//! inputs, identifier validation, and the repository trait every store
//! implements.

mod entity;
mod repository;
mod validation;

pub use entity::{NewUser, User, UserId, UserUpdate};
pub use repository::{UserMutation, UserRepository};
pub use validation::{non_blank, validate_user_id, UserValidationError};

#[cfg(test)]
pub use repository::MockUserRepository;
