//! Repository trait definitions (ports).
//!
//! These traits define the storage interface that the infrastructure layer
//! (nova-infra) implements. Every per-user operation takes the owning
//! [`UserId`](nova_types::user::UserId); a row belonging to someone else is
//! reported exactly like a missing one.

pub mod analytics;
pub mod chat;
pub mod event;
pub mod note;
pub mod notification;
pub mod preferences;
pub mod tag;
pub mod task;
pub mod user;
