//! `AuthContext` extractor — resolves the `X-Api-Auth` session header into
//! a request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use notehub_core::error::AppError;
use notehub_service::context::RequestContext;

use crate::state::AppState;

/// Header carrying the opaque session token.
pub const AUTH_HEADER: &str = "x-api-auth";

/// Extracted request context available in handlers.
///
/// The header is optional: without it the context is anonymous and
/// owner-only operations fail later with `Unauthorized`. A header that is
/// present but does not name a live session is rejected here.
#[derive(Debug, Clone)]
pub struct AuthContext(pub RequestContext);

impl AuthContext {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthContext {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let owner = match parts.headers.get(AUTH_HEADER) {
            None => None,
            Some(value) => {
                let raw = value
                    .to_str()
                    .map_err(|_| AppError::unauthorized("Invalid session token"))?;
                let session_id = Uuid::parse_str(raw)
                    .map_err(|_| AppError::unauthorized("Invalid session token"))?;
                Some(state.session_manager.resolve(session_id).await?)
            }
        };

        let ip_address = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        Ok(AuthContext(RequestContext::new(owner, ip_address)))
    }
}
