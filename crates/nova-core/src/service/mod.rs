//! Business logic services (use cases).
//!
//! Services validate payloads, enforce ownership, and orchestrate
//! repository calls. They depend on traits (ports) -- never on concrete
//! infrastructure implementations.

pub mod analytics;
pub mod auth;
pub mod chat;
pub mod event;
pub mod note;
pub mod notification;
pub mod preferences;
pub mod profile;
pub mod tag;
pub mod task;
