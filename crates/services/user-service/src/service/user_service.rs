//! User service - translates RPC verbs into repository calls.
//!
//! Errors from the repository pass upward unchanged; no retries anywhere in
//! this layer.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::{NewUser, User, UserPatch};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users.
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Create a new user from plaintext credentials.
    async fn create_user(&self, name: String, email: String, password: String) -> AppResult<User>;

    /// Get user by id.
    async fn get_user(&self, id: i64) -> AppResult<User>;

    /// Update a user. `name` is always applied; `email` and `password` only
    /// when the caller supplied them.
    async fn update_user(
        &self,
        id: i64,
        name: String,
        email: Option<String>,
        password: Option<String>,
    ) -> AppResult<User>;

    /// Permanently delete a user.
    async fn delete_user(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of UserService using the repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn create_user(&self, name: String, email: String, password: String) -> AppResult<User> {
        self.repo
            .create(NewUser {
                name,
                email,
                password,
            })
            .await
    }

    async fn get_user(&self, id: i64) -> AppResult<User> {
        self.repo.find_by_id(id).await
    }

    async fn update_user(
        &self,
        id: i64,
        name: String,
        email: Option<String>,
        password: Option<String>,
    ) -> AppResult<User> {
        self.repo.find_by_id(id).await?;

        // Wire-level optionality maps directly onto the patch: a field the
        // caller did not supply never enters the changed-field set.
        let patch = UserPatch {
            name: Some(name),
            email,
            password,
        };

        self.repo.update(id, patch).await
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        self.repo.delete(id).await
    }
}
