//! Infrastructure layer - storage and service implementations

pub mod logging;
pub mod user;
