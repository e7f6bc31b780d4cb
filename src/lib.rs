//! User Service API
//!
//! Create, read, update and delete user records over HTTP with JSON payloads.
//! Records live in an in-memory store guarded by a lock and injected into
//! the user service at startup.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::user::{InMemoryUserRepository, UserService};

/// Create the application state backed by a fresh in-memory store
pub fn create_app_state() -> AppState {
    let repository = Arc::new(InMemoryUserRepository::new());
    let user_service = UserService::new(repository);

    AppState::new(Arc::new(user_service))
}
