//! Auth handlers — login.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use notehub_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, SessionResponse, UserResponse};
use crate::state::AppState;

/// POST /api/sessions
pub async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<SessionResponse>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let result = state
        .session_manager
        .login(&req.email, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(SessionResponse {
        id: result.session.id,
        created_at: result.session.created_at,
        user: UserResponse::from(&result.user),
    })))
}
