//! Share handlers — creation, listing, public access, and invitations.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use notehub_core::error::AppError;
use notehub_core::types::pagination::{PageRequest, PageResponse};
use notehub_service::share::invite::ShareRecipient;

use crate::dto::request::{CreateShareRequest, InviteUserRequest};
use crate::dto::response::{ApiResponse, ShareResponse};
use crate::extractors::AuthContext;
use crate::state::AppState;

/// POST /api/shares
pub async fn create_share(
    State(state): State<AppState>,
    auth: AuthContext,
    Json(req): Json<CreateShareRequest>,
) -> Result<Json<ApiResponse<ShareResponse>>, AppError> {
    let share = state
        .share_service
        .create_share(
            auth.context(),
            notehub_service::share::service::CreateShareRequest {
                folder_id: req.folder_id,
                note_id: req.note_id,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(ShareResponse::from(&share))))
}

/// GET /api/shares
pub async fn list_shares(
    State(state): State<AppState>,
    auth: AuthContext,
    Query(page): Query<PageRequest>,
) -> Result<Json<ApiResponse<PageResponse<ShareResponse>>>, AppError> {
    let shares = state
        .share_service
        .list_shares(auth.context(), page)
        .await?;

    Ok(Json(ApiResponse::ok(
        shares.map(|share| ShareResponse::from(&share)),
    )))
}

/// GET /api/shares/{id} — anonymous access to link shares.
///
/// Deliberately takes no auth context: knowledge of the id is the
/// credential, and non-link shares are indistinguishable from missing
/// ones.
pub async fn get_public_share(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ShareResponse>>, AppError> {
    let share = state.share_access_service.resolve_public_share(id).await?;
    Ok(Json(ApiResponse::ok(ShareResponse::from(&share))))
}

/// POST /api/shares/{id}/users
pub async fn invite_user(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<Uuid>,
    Json(req): Json<InviteUserRequest>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let invite = state
        .share_user_service
        .invite_user(
            auth.context(),
            id,
            notehub_service::share::invite::InviteUserRequest { email: req.email },
        )
        .await?;

    Ok(Json(ApiResponse::ok(serde_json::json!({
        "id": invite.id,
        "share_id": invite.share_id,
        "is_accepted": invite.is_accepted,
    }))))
}

/// GET /api/shares/{id}/users
pub async fn list_recipients(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<ShareRecipient>>>, AppError> {
    let recipients = state
        .share_user_service
        .list_recipients(auth.context(), id)
        .await?;

    Ok(Json(ApiResponse::ok(recipients)))
}
