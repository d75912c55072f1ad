//! # notehub-entity
//!
//! Domain entity models for NoteHub. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug` and `Clone`; database entities additionally derive
//! `sqlx::FromRow` where their row shape is flat.

pub mod item;
pub mod permission;
pub mod session;
pub mod share;
pub mod user;
