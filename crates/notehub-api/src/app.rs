//! Application state construction.

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

use crate::state::AppState;

/// Wire repositories and services into an [`AppState`].
///
/// Used by the server binary and the integration test harness.
pub fn build_state(config: Arc<AppConfig>, db_pool: PgPool) -> AppState {
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let item_repo = Arc::new(ItemRepository::new(db_pool.clone()));
    let session_repo = Arc::new(SessionRepository::new(db_pool.clone()));
    let share_repo = Arc::new(ShareRepository::new(db_pool.clone()));
    let share_user_repo = Arc::new(ShareUserRepository::new(db_pool.clone()));

    let password_hasher = Arc::new(PasswordHasher::new());
    let acl_checker = Arc::new(AclChecker::new());
    let session_manager = Arc::new(SessionManager::new(
        Arc::clone(&session_repo),
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
    ));

    let share_service = Arc::new(ShareService::new(
        Arc::clone(&share_repo),
        Arc::clone(&item_repo),
        Arc::clone(&acl_checker),
    ));
    let share_user_service = Arc::new(ShareUserService::new(
        Arc::clone(&share_user_repo),
        Arc::clone(&share_repo),
        Arc::clone(&user_repo),
        Arc::clone(&acl_checker),
    ));
    let share_access_service = Arc::new(ShareAccessService::new(Arc::clone(&share_repo)));

    AppState {
        config,
        db_pool,
        password_hasher,
        session_manager,
        acl_checker,
        user_repo,
        item_repo,
        session_repo,
        share_repo,
        share_user_repo,
        share_service,
        share_user_service,
        share_access_service,
    }
}
