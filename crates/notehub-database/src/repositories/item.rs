//! Item repository implementation.
//!
//! Read-only: items are written by the sync subsystem.

use sqlx::PgPool;
use uuid::Uuid;

use notehub_core::error::{AppError, ErrorKind};
use notehub_core::result::AppResult;
use notehub_entity::item::Item;

/// Repository for owner-scoped item lookups.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    /// Create a new item repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an item by its client-assigned identifier, scoped to an owner.
    ///
    /// The owner scope means one user can never resolve another user's
    /// items — an unknown or foreign id both come back as `None`.
    pub async fn find_by_external_id(
        &self,
        owner_id: Uuid,
        external_id: &str,
    ) -> AppResult<Option<Item>> {
        sqlx::query_as::<_, Item>(
            "SELECT * FROM items WHERE owner_id = $1 AND external_id = $2",
        )
        .bind(owner_id)
        .bind(external_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find item by external id", e)
        })
    }
}
