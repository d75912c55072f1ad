//! Share entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Type of share, as stored in the `share_type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "share_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ShareType {
    /// Grants access to an entire folder subtree.
    Folder,
    /// Anonymous public access to one note.
    Link,
    /// Reserved internal share type; never created through the API.
    App,
}

impl ShareType {
    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::Link => "link",
            Self::App => "app",
        }
    }
}

impl std::fmt::Display for ShareType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ShareType {
    type Err = notehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "folder" => Ok(Self::Folder),
            "link" => Ok(Self::Link),
            "app" => Ok(Self::App),
            _ => Err(notehub_core::AppError::validation(format!(
                "Invalid share type: '{s}'"
            ))),
        }
    }
}

/// What a share grants access to.
///
/// Exactly one case applies per share; each case carries only the fields
/// meaningful to it. The external identifiers are the ones supplied at
/// creation time, retained for echo-back only — lookups after creation go
/// through `item_id`. The flat `{type, folder_id?, note_id?}` shape exists
/// only at the persistence and serialization boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareKind {
    /// The entire subtree under a folder, shared with invited users.
    Folder {
        /// External identifier of the shared folder.
        folder_id: String,
    },
    /// A single note, readable by anyone who knows the share id.
    Link {
        /// External identifier of the shared note.
        note_id: String,
    },
    /// Reserved internal kind; rows may exist but this API never creates
    /// them.
    App,
}

impl ShareKind {
    /// The `share_type` column value for this kind.
    pub fn share_type(&self) -> ShareType {
        match self {
            Self::Folder { .. } => ShareType::Folder,
            Self::Link { .. } => ShareType::Link,
            Self::App => ShareType::App,
        }
    }

    /// External folder identifier, when this is a folder share.
    pub fn folder_id(&self) -> Option<&str> {
        match self {
            Self::Folder { folder_id } => Some(folder_id),
            _ => None,
        }
    }

    /// External note identifier, when this is a link share.
    pub fn note_id(&self) -> Option<&str> {
        match self {
            Self::Link { note_id } => Some(note_id),
            _ => None,
        }
    }
}

/// A share granting access to one item.
#[derive(Debug, Clone, PartialEq)]
pub struct Share {
    /// Unique share identifier. For link shares, knowledge of this id is
    /// the access credential.
    pub id: Uuid,
    /// What the share grants access to.
    pub kind: ShareKind,
    /// Internal id of the shared item, resolved owner-scoped at creation.
    pub item_id: Uuid,
    /// The user who created the share. Immutable.
    pub owner_id: Uuid,
    /// When the share was created.
    pub created_at: DateTime<Utc>,
    /// When the share was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Share {
    /// The `share_type` column value for this share.
    pub fn share_type(&self) -> ShareType {
        self.kind.share_type()
    }

    /// Whether this share is readable anonymously.
    pub fn is_public_link(&self) -> bool {
        matches!(self.kind, ShareKind::Link { .. })
    }
}

/// Data required to create a new share.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShare {
    /// What the share grants access to.
    pub kind: ShareKind,
    /// Internal id of the shared item.
    pub item_id: Uuid,
    /// The prospective owner.
    pub owner_id: Uuid,
}
