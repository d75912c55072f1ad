//! User repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use notehub_core::error::{AppError, ErrorKind};
use notehub_core::result::AppResult;
use notehub_entity::user::{NewUser, User};

/// Repository for user lookup and identity resolution.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find all users matching the given ids.
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find users by ids", e)
            })
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// Create a new user.
    pub async fn create(&self, data: &NewUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, full_name, password_hash) \
             VALUES (LOWER($1), $2, $3) \
             RETURNING *",
        )
        .bind(&data.email)
        .bind(&data.full_name)
        .bind(&data.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict(format!("Email '{}' already exists", data.email))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    /// Resolve a user by email, creating a passwordless identity when the
    /// address is unknown.
    ///
    /// A concurrent create of the same address is recovered by re-reading
    /// the row the other writer won with.
    pub async fn resolve_or_create_by_email(&self, email: &str) -> AppResult<User> {
        if let Some(user) = self.find_by_email(email).await? {
            return Ok(user);
        }

        let new_user = NewUser {
            email: email.to_string(),
            full_name: None,
            password_hash: String::new(),
        };

        match self.create(&new_user).await {
            Ok(user) => Ok(user),
            Err(e) if e.kind == ErrorKind::Conflict => self
                .find_by_email(email)
                .await?
                .ok_or_else(|| AppError::internal(format!("User '{email}' vanished after conflict"))),
            Err(e) => Err(e),
        }
    }
}
