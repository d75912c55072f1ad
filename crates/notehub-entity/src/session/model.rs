//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An authenticated session.
///
/// The session id doubles as the opaque auth token clients send in the
/// `X-Api-Auth` header. Sessions are created on login.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier, used as the auth token.
    pub id: Uuid,
    /// The user this session belongs to.
    pub user_id: Uuid,
    /// When the session was created (login time).
    pub created_at: DateTime<Utc>,
}
