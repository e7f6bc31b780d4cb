//! User infrastructure module
//!
//! This module provides the in-memory user store and the user service that
//! implements the create/read/update/delete use cases on top of it.

mod repository;
mod service;

pub use repository::InMemoryUserRepository;
pub use service::UserService;
