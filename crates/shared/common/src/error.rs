//! Unified error handling.
//!
//! Provides a single error type that converts to and from Tonic gRPC
//! status codes, so the repository, service, and client layers share one
//! taxonomy.

use domain::DomainError;
use thiserror::Error;
use tonic::Status;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    #[error("{0} already exists")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // Credential hashing failures are fatal to the triggering operation
    #[error("Password hashing failed")]
    Hashing(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("gRPC error: {0}")]
    Grpc(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation(msg) => msg.clone(),
            AppError::Conflict(msg) => {
                // Avoid duplicating "already exists" when converted from gRPC
                if msg.ends_with("already exists") {
                    msg.clone()
                } else {
                    format!("{} already exists", msg)
                }
            }

            // Hide details for internal/security errors
            AppError::Hashing(msg) => {
                tracing::error!("Hashing error: {}", msg);
                "Credential processing failed".to_string()
            }
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            AppError::Grpc(msg) => {
                tracing::error!("gRPC error: {}", msg);
                "A service communication error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }
}

// =============================================================================
// gRPC Status (Tonic)
// =============================================================================

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        let code = match &err {
            AppError::NotFound => tonic::Code::NotFound,
            AppError::Conflict(_) => tonic::Code::AlreadyExists,
            AppError::Validation(_) => tonic::Code::InvalidArgument,
            _ => tonic::Code::Internal,
        };

        Status::new(code, err.user_message())
    }
}

impl From<Status> for AppError {
    fn from(status: Status) -> Self {
        match status.code() {
            tonic::Code::NotFound => AppError::NotFound,
            tonic::Code::AlreadyExists => AppError::Conflict(status.message().to_string()),
            tonic::Code::InvalidArgument => AppError::Validation(status.message().to_string()),
            _ => AppError::Grpc(status.message().to_string()),
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Hashing(msg) => AppError::Hashing(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
