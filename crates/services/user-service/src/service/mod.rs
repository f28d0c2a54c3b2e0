//! Service layer - business logic behind the gRPC surface.

mod user_service;

pub use user_service::{UserManager, UserService};
