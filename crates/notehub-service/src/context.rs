//! Request context carrying the authenticated owner, if any.

use chrono::{DateTime, Utc};

use notehub_core::error::AppError;
use notehub_core::result::AppResult;
use notehub_entity::user::User;

/// Context for the current request.
///
/// Built by the transport layer and passed explicitly into every service
/// method. The owner is `None` for anonymous requests — there is no
/// default identity, privileged or otherwise.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The authenticated owner, or `None` for anonymous requests.
    pub owner: Option<User>,
    /// IP address of the request origin, when known.
    pub ip_address: Option<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(owner: Option<User>, ip_address: Option<String>) -> Self {
        Self {
            owner,
            ip_address,
            request_time: Utc::now(),
        }
    }

    /// Creates an anonymous context.
    pub fn anonymous() -> Self {
        Self::new(None, None)
    }

    /// Returns the authenticated owner, or fails with `Unauthorized`.
    ///
    /// Gates every owner-only operation; the anonymous link-read path
    /// never calls this.
    pub fn require_owner(&self) -> AppResult<&User> {
        self.owner
            .as_ref()
            .ok_or_else(|| AppError::unauthorized("Session is required"))
    }
}
