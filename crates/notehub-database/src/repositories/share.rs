//! Share repository implementation.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use notehub_core::error::{AppError, ErrorKind};
use notehub_core::result::AppResult;
use notehub_core::types::pagination::{PageRequest, PageResponse};
use notehub_entity::share::{NewShare, Share, ShareKind, ShareType};

/// Name of the partial unique index guarding one folder share per
/// (owner, item). A violation means a concurrent writer already created
/// the share.
pub const FOLDER_SHARE_CONSTRAINT: &str = "shares_owner_item_folder_key";

/// Flat row shape of the `shares` table. Converted to [`Share`] at the
/// repository boundary so the rest of the application only sees the
/// tagged [`ShareKind`].
#[derive(Debug, FromRow)]
struct ShareRow {
    id: Uuid,
    share_type: ShareType,
    item_id: Uuid,
    owner_id: Uuid,
    folder_id: Option<String>,
    note_id: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ShareRow> for Share {
    type Error = AppError;

    fn try_from(row: ShareRow) -> Result<Self, Self::Error> {
        let kind = match row.share_type {
            ShareType::Folder => ShareKind::Folder {
                folder_id: row.folder_id.ok_or_else(|| {
                    AppError::database(format!("Folder share {} has no folder_id", row.id))
                })?,
            },
            ShareType::Link => ShareKind::Link {
                note_id: row.note_id.ok_or_else(|| {
                    AppError::database(format!("Link share {} has no note_id", row.id))
                })?,
            },
            ShareType::App => ShareKind::App,
        };

        Ok(Share {
            id: row.id,
            kind,
            item_id: row.item_id,
            owner_id: row.owner_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Repository for share create and query operations.
#[derive(Debug, Clone)]
pub struct ShareRepository {
    pool: PgPool,
}

impl ShareRepository {
    /// Create a new share repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a share by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Share>> {
        sqlx::query_as::<_, ShareRow>("SELECT * FROM shares WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find share", e))?
            .map(Share::try_from)
            .transpose()
    }

    /// Find the folder share for an (owner, item) pair, if one exists.
    pub async fn find_folder_share(
        &self,
        owner_id: Uuid,
        item_id: Uuid,
    ) -> AppResult<Option<Share>> {
        sqlx::query_as::<_, ShareRow>(
            "SELECT * FROM shares \
             WHERE owner_id = $1 AND item_id = $2 AND share_type = 'folder'",
        )
        .bind(owner_id)
        .bind(item_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find folder share", e)
        })?
        .map(Share::try_from)
        .transpose()
    }

    /// List shares owned by a user, newest first.
    pub async fn find_by_owner(
        &self,
        owner_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Share>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shares WHERE owner_id = $1")
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count shares", e))?;

        let rows = sqlx::query_as::<_, ShareRow>(
            "SELECT * FROM shares WHERE owner_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(owner_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list shares", e))?;

        let shares = rows
            .into_iter()
            .map(Share::try_from)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(PageResponse::new(
            shares,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new share.
    ///
    /// A folder-share uniqueness violation comes back as a `Conflict`
    /// error; the service layer resolves it by re-reading the existing
    /// share.
    pub async fn create(&self, data: &NewShare) -> AppResult<Share> {
        let row = sqlx::query_as::<_, ShareRow>(
            "INSERT INTO shares (share_type, item_id, owner_id, folder_id, note_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.kind.share_type())
        .bind(data.item_id)
        .bind(data.owner_id)
        .bind(data.kind.folder_id())
        .bind(data.kind.note_id())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some(FOLDER_SHARE_CONSTRAINT) =>
            {
                AppError::conflict("A share already exists for this folder")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create share", e),
        })?;

        Share::try_from(row)
    }
}
