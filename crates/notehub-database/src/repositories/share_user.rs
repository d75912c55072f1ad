//! Share invitation repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use notehub_core::error::{AppError, ErrorKind};
use notehub_core::result::AppResult;
use notehub_entity::share::{NewShareUser, ShareUser};

/// Name of the unique constraint guarding one invitation per
/// (share, recipient).
pub const SHARE_USER_CONSTRAINT: &str = "share_users_share_user_key";

/// Repository for share invitation create and query operations.
#[derive(Debug, Clone)]
pub struct ShareUserRepository {
    pool: PgPool,
}

impl ShareUserRepository {
    /// Create a new share invitation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all invitations on a share, oldest first.
    pub async fn find_by_share(&self, share_id: Uuid) -> AppResult<Vec<ShareUser>> {
        sqlx::query_as::<_, ShareUser>(
            "SELECT * FROM share_users WHERE share_id = $1 ORDER BY created_at ASC",
        )
        .bind(share_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list invitations", e))
    }

    /// Find the invitation for a recipient email on a share, if any.
    pub async fn find_by_share_and_email(
        &self,
        share_id: Uuid,
        email: &str,
    ) -> AppResult<Option<ShareUser>> {
        sqlx::query_as::<_, ShareUser>(
            "SELECT su.* FROM share_users su \
             JOIN users u ON u.id = su.user_id \
             WHERE su.share_id = $1 AND LOWER(u.email) = LOWER($2)",
        )
        .bind(share_id)
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find invitation by email", e)
        })
    }

    /// Create a new invitation (unaccepted).
    ///
    /// A duplicate (share, recipient) pair comes back as a `Conflict`
    /// error so a lost check-then-insert race never crashes the request.
    pub async fn create(&self, data: &NewShareUser) -> AppResult<ShareUser> {
        sqlx::query_as::<_, ShareUser>(
            "INSERT INTO share_users (share_id, user_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(data.share_id)
        .bind(data.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some(SHARE_USER_CONSTRAINT) =>
            {
                AppError::conflict("User is already invited to this share")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create invitation", e),
        })
    }
}
