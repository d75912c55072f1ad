//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered user in the NoteHub system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Email address, the login identity. Unique, stored lowercased.
    pub email: String,
    /// Human-readable name (optional).
    pub full_name: Option<String>,
    /// Argon2id password hash. Empty for identities provisioned through
    /// a share invitation that have not set a password yet.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if the user can authenticate with a password.
    pub fn has_password(&self) -> bool {
        !self.password_hash.is_empty()
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Email address.
    pub email: String,
    /// Human-readable name (optional).
    pub full_name: Option<String>,
    /// Pre-hashed password; empty for invitation-provisioned identities.
    pub password_hash: String,
}
