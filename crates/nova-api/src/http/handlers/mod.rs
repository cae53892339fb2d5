//! HTTP request handlers for the REST API.

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

use axum::Json;
use serde::Serialize;

/// Body returned by every delete endpoint.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub message: String,
}

pub(crate) fn deleted(resource: &str) -> Json<Deleted> {
    Json(Deleted {
        message: format!("{resource} deleted"),
    })
}
