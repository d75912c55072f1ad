//! Session lifecycle manager — login and session token resolution.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use notehub_core::error::AppError;
use notehub_database::repositories::session::SessionRepository;
use notehub_database::repositories::user::UserRepository;
use notehub_entity::session::Session;
use notehub_entity::user::User;

use crate::password::PasswordHasher;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// Created session; its id is the auth token.
    pub session: Session,
    /// The authenticated user.
    pub user: User,
}

/// Manages the session lifecycle: credential login and the resolution of
/// session tokens back to users.
#[derive(Debug, Clone)]
pub struct SessionManager {
    /// Session repository.
    session_repo: Arc<SessionRepository>,
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(
        session_repo: Arc<SessionRepository>,
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            session_repo,
            user_repo,
            hasher,
        }
    }

    /// Performs the login flow: validate credentials, create a session.
    ///
    /// Unknown addresses, passwordless identities (provisioned through a
    /// share invitation), and wrong passwords all fail the same way so the
    /// endpoint cannot be used to probe for registered emails.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AppError> {
        let invalid = || AppError::unauthorized("Invalid email or password");

        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(invalid)?;

        if !user.has_password() {
            return Err(invalid());
        }

        if !self.hasher.verify_password(password, &user.password_hash)? {
            return Err(invalid());
        }

        let session = self.session_repo.create(user.id).await?;

        info!(
            user_id = %user.id,
            session_id = %session.id,
            "User logged in"
        );

        Ok(LoginResult { session, user })
    }

    /// Resolves a session token to its user.
    ///
    /// Fails with `Unauthorized` when the session does not exist; callers
    /// only reach this with a token the client explicitly supplied.
    pub async fn resolve(&self, session_id: Uuid) -> Result<User, AppError> {
        let session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid session token"))?;

        self.user_repo
            .find_by_id(session.user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid session token"))
    }
}
