//! User service configuration.

use std::env;

use common::{DatabaseConfig, ServiceConfig};

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    pub service: ServiceConfig,
    pub database: DatabaseConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "user-service".to_string(),
                host: env::var("USER_SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("USER_SERVICE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(50051),
            },
            database: DatabaseConfig {
                url: env::var("USER_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or_else(|_| DatabaseConfig::default().url),
            },
        }
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "user-service".to_string(),
                ..ServiceConfig::default()
            },
            database: DatabaseConfig::default(),
        }
    }
}
