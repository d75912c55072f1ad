//! Route definitions for the NoteHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The
//! router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::http::HeaderValue;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(session_routes())
        .merge(share_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Session endpoints: login.
fn session_routes() -> Router<AppState> {
    Router::new().route("/sessions", post(handlers::auth::create_session))
}

/// Share endpoints. `GET /shares/{id}` is the anonymous link-read path
/// and carries no auth.
fn share_routes() -> Router<AppState> {
    Router::new()
        .route("/shares", post(handlers::share::create_share))
        .route("/shares", get(handlers::share::list_shares))
        .route("/shares/{id}", get(handlers::share::get_public_share))
        .route("/shares/{id}/users", post(handlers::share::invite_user))
        .route("/shares/{id}/users", get(handlers::share::list_recipients))
}

/// Health endpoints.
fn health_routes() -> Router<AppState> {
    Router::new().route("/ping", get(handlers::health::ping))
}

/// Build the CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let origins = &state.config.server.cors_allowed_origins;

    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            origins
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
