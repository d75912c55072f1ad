//! # notehub-service
//!
//! Business logic service layer for NoteHub. Each service orchestrates
//! repositories and the access control checker to implement
//! application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod share;

pub use context::RequestContext;
pub use share::{ShareAccessService, ShareService, ShareUserService};
