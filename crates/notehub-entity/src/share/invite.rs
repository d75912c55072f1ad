//! Share invitation entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An invitation binding a share to a recipient identity.
///
/// Invitations are created unaccepted; acceptance is driven by the
/// recipient's client through a separate flow.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ShareUser {
    /// Unique invitation identifier.
    pub id: Uuid,
    /// The share this invitation belongs to.
    pub share_id: Uuid,
    /// The invited recipient.
    pub user_id: Uuid,
    /// Whether the recipient has accepted the invitation.
    pub is_accepted: bool,
    /// When the invitation was created.
    pub created_at: DateTime<Utc>,
    /// When the invitation was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new invitation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewShareUser {
    /// The share being fanned out.
    pub share_id: Uuid,
    /// The resolved recipient identity.
    pub user_id: Uuid,
}
