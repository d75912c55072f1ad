//! Access control decisions for shares and invitations.
//!
//! The checker is consulted twice per mutating operation: once before a
//! draft is persisted (the draft carries the prospective owner and the
//! already-resolved item) and once when acting on a loaded entity. It
//! holds no state and performs no I/O — callers load whatever the
//! decision needs first.

use uuid::Uuid;

use notehub_core::error::AppError;
use notehub_core::result::AppResult;
use notehub_entity::item::Item;
use notehub_entity::permission::AclAction;
use notehub_entity::share::{NewShare, Share, ShareKind, ShareUser};
use notehub_entity::user::User;

/// The entity, or about-to-be-created draft, an action is checked against.
#[derive(Debug, Clone, Copy)]
pub enum AclTarget<'a> {
    /// A share that does not exist yet, with the item it would expose.
    ShareDraft {
        /// The draft share.
        draft: &'a NewShare,
        /// The resolved item the draft points at.
        item: &'a Item,
    },
    /// A loaded share.
    Share(&'a Share),
    /// An invitation that does not exist yet.
    InviteDraft {
        /// The share being fanned out.
        share: &'a Share,
        /// The resolved recipient identity.
        recipient_id: Uuid,
    },
    /// A loaded invitation, with its parent share.
    Invite {
        /// The parent share.
        share: &'a Share,
        /// The invitation.
        invite: &'a ShareUser,
    },
}

impl AclTarget<'_> {
    /// Short name used in denial messages.
    fn entity_name(&self) -> &'static str {
        match self {
            Self::ShareDraft { .. } | Self::Share(_) => "share",
            Self::InviteDraft { .. } | Self::Invite { .. } => "share invitation",
        }
    }
}

/// Decides whether an actor may perform an action on a target.
#[derive(Debug, Clone, Default)]
pub struct AclChecker;

impl AclChecker {
    /// Creates a new checker.
    pub fn new() -> Self {
        Self
    }

    /// Fails with `Forbidden` when `actor` may not perform `action` on
    /// `target`; returns normally otherwise.
    pub fn check_if_allowed(
        &self,
        actor: &User,
        action: AclAction,
        target: AclTarget<'_>,
    ) -> AppResult<()> {
        if self.is_allowed(actor, action, &target) {
            Ok(())
        } else {
            Err(AppError::forbidden(format!(
                "Cannot {} this {}",
                action,
                target.entity_name()
            )))
        }
    }

    /// The decision table. Actions without a rule deny.
    fn is_allowed(&self, actor: &User, action: AclAction, target: &AclTarget<'_>) -> bool {
        match (action, target) {
            // Creating a share: the actor must be the prospective owner and
            // own the item being exposed. Reserved kinds are never created
            // through this path.
            (AclAction::Create, AclTarget::ShareDraft { draft, item }) => {
                draft.owner_id == actor.id
                    && item.owner_id == actor.id
                    && !matches!(draft.kind, ShareKind::App)
            }
            // Reading or listing a share: owner only. Anonymous link reads
            // never reach the checker.
            (AclAction::Read | AclAction::List, AclTarget::Share(share)) => {
                share.owner_id == actor.id
            }
            // Inviting a recipient: only the share owner fans out.
            (AclAction::Create, AclTarget::InviteDraft { share, .. }) => {
                share.owner_id == actor.id
            }
            // Reading an invitation: the share owner or the invited
            // recipient.
            (AclAction::Read, AclTarget::Invite { share, invite }) => {
                share.owner_id == actor.id || invite.user_id == actor.id
            }
            _ => false,
        }
    }
}
