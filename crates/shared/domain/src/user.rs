//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User domain entity.
///
/// The identifier is assigned by the storage layer on creation and is
/// immutable for the entity's lifetime. `password_hash` only ever holds the
/// output of the credential hasher, never a plaintext secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User creation data transfer object.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    /// Display name
    pub name: String,
    /// Email address (unique across all users)
    pub email: String,
    /// Plaintext password, hashed before the row is written
    pub password: String,
}

/// Partial update for a user.
///
/// A field participates in the update only when it is `Some` and non-empty;
/// the repository treats an empty string the same as an absent field. A
/// caller therefore cannot clear a field to the empty string through this
/// type. Known limitation, kept for wire compatibility.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserPatch {
    /// Whether the given field value counts as a change.
    pub fn field_present(value: &Option<String>) -> bool {
        matches!(value, Some(s) if !s.is_empty())
    }

    /// Consume a field value, keeping it only when it counts as a change.
    pub fn supplied(value: Option<String>) -> Option<String> {
        if Self::field_present(&value) {
            value
        } else {
            None
        }
    }

    /// True when no field carries a value to apply.
    pub fn is_empty(&self) -> bool {
        !Self::field_present(&self.name)
            && !Self::field_present(&self.email)
            && !Self::field_present(&self.password)
    }
}
