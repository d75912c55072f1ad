//! Health check handler.

use axum::Json;
use axum::extract::State;

use notehub_core::error::AppError;

use crate::state::AppState;

/// GET /api/ping
pub async fn ping(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    notehub_database::connection::health_check(&state.db_pool).await?;
    Ok(Json(serde_json::json!({ "status": "ok" })))
}
