//! Request extractors shared by handlers.

pub mod auth;
pub mod json;
pub mod path;
