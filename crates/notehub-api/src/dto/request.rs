//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create share request body.
///
/// Exactly one of the references is expected; the folder reference wins
/// when both are present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateShareRequest {
    /// External id of a folder to share recursively.
    pub folder_id: Option<String>,
    /// External id of a note to publish as an anonymous link.
    pub note_id: Option<String>,
}

/// Invite recipient request body.
///
/// Deliberately not `Validate`-derived: an address that cannot name a
/// user is an unresolvable recipient (`NotFound`), not a malformed
/// request — the service decides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InviteUserRequest {
    /// Email address of the recipient.
    #[serde(default)]
    pub email: String,
}
