//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::validation::{validate_user_id, UserValidationError};

/// User identifier - a random 128-bit UUID, rendered in canonical hyphenated form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier received from a client
    pub fn parse(id: &str) -> Result<Self, UserValidationError> {
        validate_user_id(id).map(Self)
    }
}

impl std::str::FromStr for UserId {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Input for creating a user. The identifier and timestamps are assigned by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewUser {
    #[serde(default)]
    #[validate(length(min = 2, max = 50))]
    pub name: String,
    #[serde(default)]
    #[validate(range(min = 0, max = 120))]
    pub age: i32,
    #[serde(default)]
    pub address: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, age: i32, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            address: address.into(),
        }
    }
}

/// Partial update of a user. Absent or blank fields leave the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl UserUpdate {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// User record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, assigned on creation and never changed
    id: UserId,
    #[validate(length(min = 2, max = 50))]
    name: String,
    #[validate(range(min = 0, max = 120))]
    age: i32,
    #[serde(default)]
    address: String,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp, unset until the first update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new user record from creation input
    pub fn new(id: UserId, input: NewUser) -> Self {
        Self {
            id,
            name: input.name,
            age: input.age,
            address: input.address,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    // Getters

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    // Mutators

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    /// Stamp the record as updated now
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}
