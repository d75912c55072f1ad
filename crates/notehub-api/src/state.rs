//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use notehub_auth::acl::AclChecker;
use notehub_auth::password::PasswordHasher;
use notehub_auth::session::SessionManager;
use notehub_core::config::AppConfig;
use notehub_database::repositories::item::ItemRepository;
use notehub_database::repositories::session::SessionRepository;
use notehub_database::repositories::share::ShareRepository;
use notehub_database::repositories::share_user::ShareUserRepository;
use notehub_database::repositories::user::UserRepository;
use notehub_service::share::{ShareAccessService, ShareService, ShareUserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// Password hasher (Argon2id).
    pub password_hasher: Arc<PasswordHasher>,
    /// Session lifecycle manager.
    pub session_manager: Arc<SessionManager>,
    /// Access control checker.
    pub acl_checker: Arc<AclChecker>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository.
    pub user_repo: Arc<UserRepository>,
    /// Item repository.
    pub item_repo: Arc<ItemRepository>,
    /// Session repository.
    pub session_repo: Arc<SessionRepository>,
    /// Share repository.
    pub share_repo: Arc<ShareRepository>,
    /// Share invitation repository.
    pub share_user_repo: Arc<ShareUserRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Share service.
    pub share_service: Arc<ShareService>,
    /// Share invitation service.
    pub share_user_service: Arc<ShareUserService>,
    /// Anonymous share access service.
    pub share_access_service: Arc<ShareAccessService>,
}
