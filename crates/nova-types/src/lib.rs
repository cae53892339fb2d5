//! Shared domain types for Nova.
//!
//! This crate contains the domain types used across the Nova workspace:
//! users, conversation turns, tasks, notes, calendar events, tags,
//! notifications, preferences, analytics, LLM request shapes, and the
//! error enums that travel between layers.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod analytics;
pub mod chat;
pub mod error;
pub mod event;
pub mod llm;
pub mod note;
pub mod notification;
pub mod patch;
pub mod preferences;
pub mod tag;
pub mod task;
pub mod time;
pub mod user;
