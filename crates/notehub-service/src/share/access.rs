//! Anonymous share access.

use std::sync::Arc;

use uuid::Uuid;

use notehub_core::error::AppError;
use notehub_core::result::AppResult;
use notehub_database::repositories::share::ShareRepository;
use notehub_entity::share::Share;

/// Resolves public link shares for anonymous readers.
///
/// This is the one path that runs without a request context or an access
/// control check: knowing a link share's id is the credential.
#[derive(Debug, Clone)]
pub struct ShareAccessService {
    /// Share repository.
    share_repo: Arc<ShareRepository>,
}

impl ShareAccessService {
    /// Creates a new access service.
    pub fn new(share_repo: Arc<ShareRepository>) -> Self {
        Self { share_repo }
    }

    /// Loads a link share by id for anonymous reading.
    ///
    /// An absent share and an existing non-link share fail with the same
    /// `NotFound`, so the endpoint cannot be used to probe for private
    /// shares.
    pub async fn resolve_public_share(&self, id: Uuid) -> AppResult<Share> {
        self.share_repo
            .find_by_id(id)
            .await?
            .filter(Share::is_public_link)
            .ok_or_else(|| AppError::not_found(format!("No such share: {id}")))
    }
}
