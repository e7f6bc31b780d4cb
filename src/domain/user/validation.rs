//! User validation utilities

use thiserror::Error;
use uuid::Uuid;

use crate::domain::DomainError;

/// Errors that can occur while validating user identifiers
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("empty id provided")]
    EmptyId,

    #[error("User ID '{0}' is not a valid UUID")]
    MalformedId(String),
}

impl From<UserValidationError> for DomainError {
    fn from(err: UserValidationError) -> Self {
        DomainError::invalid_input(err.to_string())
    }
}

/// Validate and parse a user ID
///
/// Rules:
/// - Cannot be empty or whitespace only
/// - Must be a UUID in any textual form the `uuid` crate accepts
pub fn validate_user_id(id: &str) -> Result<Uuid, UserValidationError> {
    let trimmed = id.trim();

    if trimmed.is_empty() {
        return Err(UserValidationError::EmptyId);
    }

    Uuid::parse_str(trimmed).map_err(|_| UserValidationError::MalformedId(id.to_string()))
}

/// Returns the field value when it carries content after trimming.
///
/// Partial updates treat `None` and blank strings alike: the stored field
/// is left unchanged.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
