//! Synced item entity model.
//!
//! Items are written by the sync subsystem; the sharing core only reads
//! them to resolve owner-scoped external identifiers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Kind of synced item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "item_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A folder, possibly containing other folders and notes.
    Folder,
    /// A single note.
    Note,
}

impl ItemKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::Note => "note",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ItemKind {
    type Err = notehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "folder" => Ok(Self::Folder),
            "note" => Ok(Self::Note),
            _ => Err(notehub_core::AppError::validation(format!(
                "Invalid item kind: '{s}'"
            ))),
        }
    }
}

/// A synced item owned by a user.
///
/// `external_id` is the client-assigned identifier; it is unique per owner
/// and all API-level item references use it. The internal `id` never leaves
/// the server.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Item {
    /// Unique internal identifier.
    pub id: Uuid,
    /// The user who owns this item.
    pub owner_id: Uuid,
    /// Client-assigned identifier, unique per owner.
    pub external_id: String,
    /// Kind of item.
    pub kind: ItemKind,
    /// Display name.
    pub name: String,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
    /// When the item was last updated.
    pub updated_at: DateTime<Utc>,
}
