//! HTTP/REST API layer for Nova.
//!
//! Axum router under `/api/`, bearer credential authentication, camelCase
//! JSON bodies and CORS for the SPA origin.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
