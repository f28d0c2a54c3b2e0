//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Types here are shared between the service layers and its clients.

pub mod error;
pub mod password;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use password::Password;
pub use user::{NewUser, User, UserPatch};
