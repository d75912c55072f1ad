//! Share invitation fan-out and recipient listing.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use validator::ValidateEmail;

use notehub_auth::acl::{AclChecker, AclTarget};
use notehub_core::error::{AppError, ErrorKind};
use notehub_core::result::AppResult;
use notehub_database::repositories::share::ShareRepository;
use notehub_database::repositories::share_user::ShareUserRepository;
use notehub_database::repositories::user::UserRepository;
use notehub_entity::permission::AclAction;
use notehub_entity::share::{NewShareUser, Share, ShareUser};

use crate::context::RequestContext;

/// Request to invite a recipient to a share.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InviteUserRequest {
    /// Email address of the recipient.
    #[serde(default)]
    pub email: String,
}

/// One recipient entry as exposed to the share owner: the acceptance flag
/// and the email, nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareRecipient {
    /// Whether the recipient accepted the invitation.
    pub is_accepted: bool,
    /// The recipient, reduced to the email address.
    pub user: RecipientUser,
}

/// The only recipient attribute the listing exposes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipientUser {
    /// Email address.
    pub email: String,
}

/// Manages the fan-out of a share to individual recipients.
#[derive(Debug, Clone)]
pub struct ShareUserService {
    /// Invitation repository.
    share_user_repo: Arc<ShareUserRepository>,
    /// Share repository.
    share_repo: Arc<ShareRepository>,
    /// User repository for recipient identity resolution.
    user_repo: Arc<UserRepository>,
    /// Access control checker.
    acl: Arc<AclChecker>,
}

impl ShareUserService {
    /// Creates a new share invitation service.
    pub fn new(
        share_user_repo: Arc<ShareUserRepository>,
        share_repo: Arc<ShareRepository>,
        user_repo: Arc<UserRepository>,
        acl: Arc<AclChecker>,
    ) -> Self {
        Self {
            share_user_repo,
            share_repo,
            user_repo,
            acl,
        }
    }

    /// Invites a recipient to a share by email.
    ///
    /// The recipient identity is resolved — or provisioned — by the user
    /// store; the invitation starts unaccepted. Inviting the same address
    /// twice fails with `Conflict`.
    pub async fn invite_user(
        &self,
        ctx: &RequestContext,
        share_id: Uuid,
        req: InviteUserRequest,
    ) -> AppResult<ShareUser> {
        let owner = ctx.require_owner()?;
        let share = self.load_share(share_id).await?;

        let email = req.email.trim().to_lowercase();
        if !email.validate_email() {
            // A reference that cannot name a user is an unresolvable
            // recipient, not a malformed request.
            return Err(AppError::not_found(format!("User not found: {email}")));
        }

        let recipient = self.user_repo.resolve_or_create_by_email(&email).await?;

        self.acl.check_if_allowed(
            owner,
            AclAction::Create,
            AclTarget::InviteDraft {
                share: &share,
                recipient_id: recipient.id,
            },
        )?;

        let already_shared = || AppError::conflict(format!("Already shared with user: {email}"));

        if self
            .share_user_repo
            .find_by_share_and_email(share.id, &email)
            .await?
            .is_some()
        {
            return Err(already_shared());
        }

        let invite = match self
            .share_user_repo
            .create(&NewShareUser {
                share_id: share.id,
                user_id: recipient.id,
            })
            .await
        {
            Ok(invite) => invite,
            // Lost the check-then-insert race; same outcome as the check.
            Err(e) if e.kind == ErrorKind::Conflict => return Err(already_shared()),
            Err(e) => return Err(e),
        };

        info!(
            owner_id = %owner.id,
            share_id = %share.id,
            recipient_id = %recipient.id,
            "Share invitation created"
        );

        Ok(invite)
    }

    /// Lists the recipients of a share.
    ///
    /// Gated at the share level: whoever may read the share may see its
    /// full recipient list. Output is restricted to the acceptance flag
    /// and the email address.
    pub async fn list_recipients(
        &self,
        ctx: &RequestContext,
        share_id: Uuid,
    ) -> AppResult<Vec<ShareRecipient>> {
        let owner = ctx.require_owner()?;
        let share = self.load_share(share_id).await?;

        self.acl
            .check_if_allowed(owner, AclAction::Read, AclTarget::Share(&share))?;

        let invites = self.share_user_repo.find_by_share(share.id).await?;

        let user_ids: Vec<Uuid> = invites.iter().map(|i| i.user_id).collect();
        let emails: HashMap<Uuid, String> = self
            .user_repo
            .find_by_ids(&user_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u.email))
            .collect();

        invites
            .into_iter()
            .map(|invite| {
                let email = emails.get(&invite.user_id).cloned().ok_or_else(|| {
                    AppError::internal(format!(
                        "Recipient {} of share {} has no user record",
                        invite.user_id, share_id
                    ))
                })?;
                Ok(ShareRecipient {
                    is_accepted: invite.is_accepted,
                    user: RecipientUser { email },
                })
            })
            .collect()
    }

    async fn load_share(&self, share_id: Uuid) -> AppResult<Share> {
        self.share_repo
            .find_by_id(share_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("No such share: {share_id}")))
    }
}
