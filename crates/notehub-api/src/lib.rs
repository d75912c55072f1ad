//! # notehub-api
//!
//! HTTP API layer for NoteHub built on Axum.
//!
//! Provides the REST endpoints, the auth extractor, DTOs, and error
//! mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::build_state;
pub use router::build_router;
pub use state::AppState;
