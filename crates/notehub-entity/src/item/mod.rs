//! Synced item domain entities.

pub mod model;

pub use model::{Item, ItemKind};
