//! User repository implementation.
//!
//! Password hashing happens here, immediately before the write: the create
//! path always hashes, the update path hashes only when the computed set of
//! changed fields contains the password. No code path can persist a
//! plaintext secret.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    Set, SqlErr,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{NewUser, Password, User, UserPatch};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every live row, in storage-native order.
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Insert a new user; the returned entity carries the assigned id.
    async fn create(&self, new_user: NewUser) -> AppResult<User>;

    /// Find a user by id.
    async fn find_by_id(&self, id: i64) -> AppResult<User>;

    /// Apply a partial update and return the committed row.
    async fn update(&self, id: i64, patch: UserPatch) -> AppResult<User>;

    /// Permanently remove a user row.
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of UserRepository backed by SeaORM.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        // Hash before the row is written; a hashing failure fails the create.
        let password_hash = Password::new(&new_user.password)?.into_string();

        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(new_user.name),
            email: Set(new_user.email),
            password_hash: Set(password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;
        Ok(User::from(model))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<User> {
        UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .map(User::from)
            .ok_or(AppError::NotFound)
    }

    async fn update(&self, id: i64, patch: UserPatch) -> AppResult<User> {
        // A field is changed only when it was supplied non-empty; the
        // emptiness rule itself lives on UserPatch. A field cannot be
        // cleared to the empty string here (known limitation of the wire
        // contract).
        if patch.is_empty() {
            return Err(AppError::validation("No fields provided to update"));
        }

        let mut query = UserEntity::update_many().filter(user::Column::Id.eq(id));

        if let Some(name) = UserPatch::supplied(patch.name) {
            query = query.col_expr(user::Column::Name, Expr::value(name));
        }
        if let Some(email) = UserPatch::supplied(patch.email) {
            query = query.col_expr(user::Column::Email, Expr::value(email));
        }
        if let Some(password) = UserPatch::supplied(patch.password) {
            // Re-hash only because the password field itself changed.
            let password_hash = Password::new(&password)?.into_string();
            query = query.col_expr(user::Column::PasswordHash, Expr::value(password_hash));
        }

        query = query.col_expr(user::Column::UpdatedAt, Expr::value(chrono::Utc::now()));

        let result = query.exec(&self.db).await.map_err(map_db_err)?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        // Re-read so the caller sees storage-committed state, not an
        // in-memory merge of the patch.
        self.find_by_id(id).await
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}

/// Translate storage errors, surfacing unique-email violations as conflicts.
fn map_db_err(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("Email"),
        _ => AppError::from(err),
    }
}
