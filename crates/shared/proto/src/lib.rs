//! gRPC protocol buffer definitions.
//!
//! This crate contains the generated gRPC service definition for
//! UserService: user management (CRUD).

/// User service definitions.
pub mod user {
    tonic::include_proto!("user");
}

// Re-export commonly used items
pub use user::user_service_client::UserServiceClient;
pub use user::user_service_server::{UserService, UserServiceServer};
