//! gRPC client wrapper for the user service.
//!
//! Thin typed facade over the generated tonic client, returning the wire
//! view types and mapping `Status` back into `AppError`.

use tonic::transport::Channel;
use tracing::debug;

use common::{AppError, AppResult, GrpcClientConfig};
use proto::user::{
    user_service_client::UserServiceClient as ProtoUserServiceClient, AllUsersRequest,
    CreateUserRequest, DeleteUserRequest, GetUserRequest, UpdateUserRequest, User, UserResponse,
};

/// gRPC client wrapper for user-service.
pub struct UserClient {
    client: ProtoUserServiceClient<Channel>,
}

impl UserClient {
    /// Connect to the user service.
    pub async fn connect(endpoint: &str) -> Result<Self, tonic::transport::Error> {
        debug!("Connecting to user-service at {}", endpoint);
        let client = ProtoUserServiceClient::connect(endpoint.to_string()).await?;
        Ok(Self { client })
    }

    /// Connect using a client configuration.
    pub async fn from_config(config: &GrpcClientConfig) -> Result<Self, tonic::transport::Error> {
        Self::connect(&config.endpoint).await
    }

    /// Create a user.
    pub async fn create_user(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> AppResult<User> {
        let request = tonic::Request::new(CreateUserRequest {
            name,
            email,
            password,
        });

        let mut client = self.client.clone();
        let response = client.create_user(request).await.map_err(AppError::from)?;
        unwrap_user(response.into_inner())
    }

    /// Get user by id.
    pub async fn get_user(&self, id: u64) -> AppResult<User> {
        let request = tonic::Request::new(GetUserRequest { id });

        let mut client = self.client.clone();
        let response = client.get_user(request).await.map_err(AppError::from)?;
        unwrap_user(response.into_inner())
    }

    /// Update a user. Unsupplied email/password fields are left unchanged.
    pub async fn update_user(
        &self,
        id: u64,
        name: String,
        email: Option<String>,
        password: Option<String>,
    ) -> AppResult<User> {
        let request = tonic::Request::new(UpdateUserRequest {
            id,
            name,
            email,
            password,
        });

        let mut client = self.client.clone();
        let response = client.update_user(request).await.map_err(AppError::from)?;
        unwrap_user(response.into_inner())
    }

    /// List all users.
    pub async fn all_users(&self) -> AppResult<Vec<User>> {
        let request = tonic::Request::new(AllUsersRequest {});

        let mut client = self.client.clone();
        let response = client.all_users(request).await.map_err(AppError::from)?;
        Ok(response.into_inner().users)
    }

    /// Permanently delete a user.
    pub async fn delete_user(&self, id: u64) -> AppResult<bool> {
        let request = tonic::Request::new(DeleteUserRequest { id });

        let mut client = self.client.clone();
        let response = client.delete_user(request).await.map_err(AppError::from)?;
        Ok(response.into_inner().success)
    }
}

/// Extract the user view from a response envelope.
fn unwrap_user(response: UserResponse) -> AppResult<User> {
    response
        .user
        .ok_or_else(|| AppError::internal("user-service response missing user payload"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_user_present() {
        let response = UserResponse {
            user: Some(User {
                id: 1,
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            }),
        };
        assert_eq!(unwrap_user(response).unwrap().id, 1);
    }

    #[test]
    fn test_unwrap_user_missing_is_internal_error() {
        let response = UserResponse { user: None };
        assert!(matches!(
            unwrap_user(response).unwrap_err(),
            AppError::Internal(_)
        ));
    }
}
