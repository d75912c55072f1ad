//! ACL action definitions.

use serde::{Deserialize, Serialize};

/// Actions that can be checked against the access control rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AclAction {
    /// Create a new entity.
    Create,
    /// Read an existing entity.
    Read,
    /// Update an existing entity.
    Update,
    /// Delete an existing entity.
    Delete,
    /// List entities of a kind.
    List,
}

impl AclAction {
    /// Return the action as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::List => "list",
        }
    }
}

impl std::fmt::Display for AclAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
