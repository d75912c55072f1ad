//! Share creation and listing.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use notehub_auth::acl::{AclChecker, AclTarget};
use notehub_core::error::{AppError, ErrorKind};
use notehub_core::result::AppResult;
use notehub_core::types::pagination::{PageRequest, PageResponse};
use notehub_database::repositories::item::ItemRepository;
use notehub_database::repositories::share::ShareRepository;
use notehub_entity::item::Item;
use notehub_entity::permission::AclAction;
use notehub_entity::share::{NewShare, Share, ShareKind};

use crate::context::RequestContext;

/// Request to create a new share.
///
/// Exactly one of the references is expected; when both are present the
/// folder reference wins.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CreateShareRequest {
    /// External id of a folder to share recursively.
    pub folder_id: Option<String>,
    /// External id of a note to publish as an anonymous link.
    pub note_id: Option<String>,
}

/// Manages share creation, lookup, and listing.
#[derive(Debug, Clone)]
pub struct ShareService {
    /// Share repository.
    share_repo: Arc<ShareRepository>,
    /// Item repository for owner-scoped reference resolution.
    item_repo: Arc<ItemRepository>,
    /// Access control checker.
    acl: Arc<AclChecker>,
}

impl ShareService {
    /// Creates a new share service.
    pub fn new(
        share_repo: Arc<ShareRepository>,
        item_repo: Arc<ItemRepository>,
        acl: Arc<AclChecker>,
    ) -> Self {
        Self {
            share_repo,
            item_repo,
            acl,
        }
    }

    /// Creates a share for a folder or a note.
    ///
    /// Folder shares are idempotent per (owner, item): a second request
    /// returns the existing share unchanged.
    pub async fn create_share(
        &self,
        ctx: &RequestContext,
        req: CreateShareRequest,
    ) -> AppResult<Share> {
        let owner = ctx.require_owner()?;

        let (draft, item) = if let Some(folder_id) = req.folder_id {
            let item = self.resolve_item(owner.id, &folder_id, "folder").await?;

            // Already shared: return the existing share as-is. The checker
            // is skipped — nothing new is being granted.
            if let Some(existing) = self.share_repo.find_folder_share(owner.id, item.id).await? {
                return Ok(existing);
            }

            let draft = NewShare {
                kind: ShareKind::Folder { folder_id },
                item_id: item.id,
                owner_id: owner.id,
            };
            (draft, item)
        } else if let Some(note_id) = req.note_id {
            let item = self.resolve_item(owner.id, &note_id, "note").await?;
            let draft = NewShare {
                kind: ShareKind::Link { note_id },
                item_id: item.id,
                owner_id: owner.id,
            };
            (draft, item)
        } else {
            return Err(AppError::validation(
                "Either folder_id or note_id must be provided",
            ));
        };

        self.acl.check_if_allowed(
            owner,
            AclAction::Create,
            AclTarget::ShareDraft {
                draft: &draft,
                item: &item,
            },
        )?;

        let share = match self.share_repo.create(&draft).await {
            Ok(share) => share,
            // Lost the check-then-insert race: the concurrent writer's
            // folder share is authoritative.
            Err(e) if e.kind == ErrorKind::Conflict => self
                .share_repo
                .find_folder_share(owner.id, draft.item_id)
                .await?
                .ok_or(e)?,
            Err(e) => return Err(e),
        };

        info!(
            owner_id = %owner.id,
            share_id = %share.id,
            share_type = %share.share_type(),
            "Share created"
        );

        Ok(share)
    }

    /// Loads a share by id. Absent shares are the caller's concern.
    pub async fn get_share(&self, id: Uuid) -> AppResult<Option<Share>> {
        self.share_repo.find_by_id(id).await
    }

    /// Lists shares owned by the current user, newest first.
    pub async fn list_shares(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> AppResult<PageResponse<Share>> {
        let owner = ctx.require_owner()?;
        self.share_repo.find_by_owner(owner.id, &page).await
    }

    /// Resolves an external item reference scoped to the owner. Unknown
    /// and foreign ids both fail with `NotFound`.
    async fn resolve_item(&self, owner_id: Uuid, external_id: &str, what: &str) -> AppResult<Item> {
        self.item_repo
            .find_by_external_id(owner_id, external_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("No such {what}: {external_id}")))
    }
}
