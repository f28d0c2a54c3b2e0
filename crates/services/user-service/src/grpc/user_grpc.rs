//! gRPC implementation for UserService.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use crate::service::UserService;
use proto::user::{
    user_service_server::UserService as UserServiceProto, AllUsersRequest, AllUsersResponse,
    CreateUserRequest, DeleteUserRequest, DeleteUserResponse, GetUserRequest, UpdateUserRequest,
    UserResponse,
};

/// gRPC service wrapper for UserService.
pub struct UserGrpcService {
    service: Arc<dyn UserService>,
}

impl UserGrpcService {
    /// Create a new gRPC service wrapper.
    pub fn new(service: Arc<dyn UserService>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl UserServiceProto for UserGrpcService {
    async fn create_user(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let req = request.into_inner();

        let user = self
            .service
            .create_user(req.name, req.email, req.password)
            .await
            .map_err(Status::from)?;
        Ok(Response::new(user_response(&user)))
    }

    async fn get_user(
        &self,
        request: Request<GetUserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let req = request.into_inner();
        let id = parse_id(req.id)?;

        let user = self.service.get_user(id).await.map_err(Status::from)?;
        Ok(Response::new(user_response(&user)))
    }

    async fn update_user(
        &self,
        request: Request<UpdateUserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let req = request.into_inner();
        let id = parse_id(req.id)?;

        let user = self
            .service
            .update_user(id, req.name, req.email, req.password)
            .await
            .map_err(Status::from)?;
        Ok(Response::new(user_response(&user)))
    }

    async fn all_users(
        &self,
        _request: Request<AllUsersRequest>,
    ) -> Result<Response<AllUsersResponse>, Status> {
        let users = self.service.list_users().await.map_err(Status::from)?;
        let users: Vec<proto::user::User> = users.iter().map(user_view).collect();

        Ok(Response::new(AllUsersResponse { users }))
    }

    async fn delete_user(
        &self,
        request: Request<DeleteUserRequest>,
    ) -> Result<Response<DeleteUserResponse>, Status> {
        let req = request.into_inner();
        let id = parse_id(req.id)?;

        // On failure the error status is the response; a failed delete can
        // never be observed as success=true.
        self.service.delete_user(id).await.map_err(Status::from)?;
        Ok(Response::new(DeleteUserResponse { success: true }))
    }
}

/// Parse a wire identifier into a storage id.
fn parse_id(id: u64) -> Result<i64, Status> {
    i64::try_from(id).map_err(|_| Status::invalid_argument("Invalid user id"))
}

/// Project a domain User to its public wire view (no password).
fn user_view(user: &domain::User) -> proto::user::User {
    proto::user::User {
        id: user.id as u64,
        name: user.name.clone(),
        email: user.email.clone(),
    }
}

/// Wrap a domain User in a UserResponse.
fn user_response(user: &domain::User) -> UserResponse {
    UserResponse {
        user: Some(user_view(user)),
    }
}
