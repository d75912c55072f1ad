//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use notehub_entity::share::{Share, ShareType};
use notehub_entity::user::User;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Public representation of a share.
///
/// This is the flat wire shape: the `kind` variant is projected onto
/// `type` plus at most one of the external id fields. Internal fields
/// (`item_id`, the owner) are never exposed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareResponse {
    /// Share identifier.
    pub id: Uuid,
    /// Share type.
    #[serde(rename = "type")]
    pub share_type: ShareType,
    /// External folder id, for folder shares.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    /// External note id, for link shares.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_id: Option<String>,
}

impl From<&Share> for ShareResponse {
    fn from(share: &Share) -> Self {
        Self {
            id: share.id,
            share_type: share.share_type(),
            folder_id: share.kind.folder_id().map(String::from),
            note_id: share.kind.note_id().map(String::from),
        }
    }
}

/// User summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Email address.
    pub email: String,
    /// Full name.
    pub full_name: Option<String>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            full_name: user.full_name.clone(),
        }
    }
}

/// Login response: the session id is the auth token for the
/// `X-Api-Auth` header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Session id / auth token.
    pub id: Uuid,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// The authenticated user.
    pub user: UserResponse,
}
