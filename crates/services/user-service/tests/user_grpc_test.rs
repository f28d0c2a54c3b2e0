//! gRPC layer integration tests: full verb-by-verb lifecycle.

mod support;

use std::sync::Arc;

use tonic::{Code, Request};

use proto::user::user_service_server::UserService as UserServiceProto;
use proto::user::{
    AllUsersRequest, CreateUserRequest, DeleteUserRequest, GetUserRequest, UpdateUserRequest,
};
use user_service_lib::grpc::UserGrpcService;
use user_service_lib::repository::UserStore;
use user_service_lib::service::UserManager;

async fn setup_grpc() -> UserGrpcService {
    let db = support::setup_db().await;
    let repo = Arc::new(UserStore::new(db));
    let service = Arc::new(UserManager::new(repo));
    UserGrpcService::new(service)
}

#[tokio::test]
async fn test_user_lifecycle() {
    let grpc = setup_grpc().await;

    // Create
    let created = grpc
        .create_user(Request::new(CreateUserRequest {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret".to_string(),
        }))
        .await
        .unwrap()
        .into_inner()
        .user
        .unwrap();

    assert_eq!(created.id, 1);
    assert_eq!(created.name, "Alice");
    assert_eq!(created.email, "alice@example.com");

    // Get returns the same view
    let fetched = grpc
        .get_user(Request::new(GetUserRequest { id: created.id }))
        .await
        .unwrap()
        .into_inner()
        .user
        .unwrap();
    assert_eq!(fetched, created);

    // Update name and email; password untouched
    let updated = grpc
        .update_user(Request::new(UpdateUserRequest {
            id: created.id,
            name: "Alice Updated".to_string(),
            email: Some("alice.new@example.com".to_string()),
            password: None,
        }))
        .await
        .unwrap()
        .into_inner()
        .user
        .unwrap();

    assert_eq!(updated.name, "Alice Updated");
    assert_eq!(updated.email, "alice.new@example.com");

    // List returns exactly the updated view
    let listed = grpc
        .all_users(Request::new(AllUsersRequest {}))
        .await
        .unwrap()
        .into_inner()
        .users;
    assert_eq!(listed, vec![updated]);

    // Delete reports success
    let deleted = grpc
        .delete_user(Request::new(DeleteUserRequest { id: created.id }))
        .await
        .unwrap()
        .into_inner();
    assert!(deleted.success);

    // Subsequent get fails with NotFound
    let status = grpc
        .get_user(Request::new(GetUserRequest { id: created.id }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test]
async fn test_create_duplicate_email_is_already_exists() {
    let grpc = setup_grpc().await;

    let request = CreateUserRequest {
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        password: "secret".to_string(),
    };

    grpc.create_user(Request::new(request.clone())).await.unwrap();
    let status = grpc.create_user(Request::new(request)).await.unwrap_err();

    assert_eq!(status.code(), Code::AlreadyExists);
}

#[tokio::test]
async fn test_update_keeps_unsupplied_email() {
    let grpc = setup_grpc().await;

    let created = grpc
        .create_user(Request::new(CreateUserRequest {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            password: "secret".to_string(),
        }))
        .await
        .unwrap()
        .into_inner()
        .user
        .unwrap();

    let updated = grpc
        .update_user(Request::new(UpdateUserRequest {
            id: created.id,
            name: "Charlie".to_string(),
            email: None,
            password: None,
        }))
        .await
        .unwrap()
        .into_inner()
        .user
        .unwrap();

    assert_eq!(updated.name, "Charlie");
    assert_eq!(updated.email, "john@example.com");
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() {
    let grpc = setup_grpc().await;

    let status = grpc
        .update_user(Request::new(UpdateUserRequest {
            id: 999,
            name: "Nobody".to_string(),
            email: None,
            password: None,
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test]
async fn test_oversized_id_is_invalid_argument() {
    let grpc = setup_grpc().await;

    let status = grpc
        .get_user(Request::new(GetUserRequest { id: u64::MAX }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);

    let status = grpc
        .delete_user(Request::new(DeleteUserRequest { id: u64::MAX }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn test_delete_missing_user_is_not_found() {
    let grpc = setup_grpc().await;

    let status = grpc
        .delete_user(Request::new(DeleteUserRequest { id: 999 }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::NotFound);
}
