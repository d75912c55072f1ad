//! Shared test helpers for integration tests.
//!
//! Tests need a PostgreSQL instance reachable through
//! `NOTEHUB_TEST_DATABASE_URL`; when the variable is unset each test
//! reports itself as skipped and passes. Test data is namespaced with
//! random identifiers instead of truncated, so tests can run in parallel
//! against the same database.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use notehub_auth::password::PasswordHasher;
use notehub_core::config::{AppConfig, DatabaseConfig, LoggingConfig, ServerConfig};

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Database pool for direct fixture queries.
    pub db_pool: PgPool,
}

/// A decoded test response.
pub struct TestResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Parsed JSON body (`Null` when empty or not JSON).
    pub body: Value,
}

impl TestApp {
    /// Create a new test application, or `None` when no test database is
    /// configured.
    pub async fn try_new() -> Option<Self> {
        let url = std::env::var("NOTEHUB_TEST_DATABASE_URL").ok()?;

        let config = AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url,
                max_connections: 5,
                min_connections: 1,
                connect_timeout_seconds: 5,
                idle_timeout_seconds: 60,
            },
            logging: LoggingConfig::default(),
        };

        let db_pool = notehub_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        notehub_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let state = notehub_api::build_state(Arc::new(config), db_pool.clone());
        let router = notehub_api::build_router(state);

        Some(Self { router, db_pool })
    }

    /// Perform a request against the router.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        session: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(session) = session {
            builder = builder.header("x-api-auth", session);
        }

        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Insert a user with a hashed password, returning its id.
    pub async fn create_user(&self, email: &str, password: &str) -> Uuid {
        let hash = PasswordHasher::new()
            .hash_password(password)
            .expect("Failed to hash password");

        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO users (email, password_hash) VALUES (LOWER($1), $2) RETURNING id",
        )
        .bind(email)
        .bind(hash)
        .fetch_one(&self.db_pool)
        .await
        .expect("Failed to create user")
    }

    /// Log a user in and return the session token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/sessions",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "Login failed");
        response.body["data"]["id"]
            .as_str()
            .expect("No session id in login response")
            .to_string()
    }

    /// Insert a synced item for an owner, returning its external id.
    pub async fn create_item(&self, owner_id: Uuid, kind: &str) -> String {
        let external_id = Uuid::new_v4().simple().to_string();
        sqlx::query(
            "INSERT INTO items (owner_id, external_id, kind, name) \
             VALUES ($1, $2, $3::item_kind, 'test item')",
        )
        .bind(owner_id)
        .bind(&external_id)
        .bind(kind)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create item");
        external_id
    }
}

/// Generate a unique email address for a test.
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.com", Uuid::new_v4().simple())
}

/// Print a skip notice for environments without a test database.
pub fn skip_notice(test: &str) {
    eprintln!("{test}: NOTEHUB_TEST_DATABASE_URL not set, skipping");
}
