//! Axum router configuration with middleware.
//!
//! All resource routes live under `/api/`. Middleware: CORS, tracing.
//!
//! When the built SPA directory exists it is served for every other path,
//! with unknown paths falling through to its `index.html` for client-side
//! routing.

use std::path::Path;

use axum::Router;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::extract::State;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::routing::{get, post, put};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState, cors_origin: &str, web_dir: &Path) -> anyhow::Result<Router> {
    let cors = CorsLayer::new()
        .allow_origin(cors_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true);

    let api_routes = Router::new()
        // Credential issuance (no gate)
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        // Chat
        .route(
            "/chat",
            get(handlers::chat::history)
                .post(handlers::chat::post)
                .delete(handlers::chat::clear),
        )
        // Tasks
        .route("/tasks", get(handlers::task::list).post(handlers::task::create))
        .route(
            "/tasks/{id}",
            put(handlers::task::update).delete(handlers::task::delete),
        )
        // Notes
        .route("/notes", get(handlers::note::list).post(handlers::note::create))
        .route(
            "/notes/{id}",
            put(handlers::note::update).delete(handlers::note::delete),
        )
        // Calendar events
        .route("/events", get(handlers::event::list).post(handlers::event::create))
        .route(
            "/events/{id}",
            put(handlers::event::update).delete(handlers::event::delete),
        )
        // Tags
        .route("/tags", get(handlers::tag::list).post(handlers::tag::create))
        .route("/tags/{id}", axum::routing::delete(handlers::tag::delete))
        // Notifications
        .route(
            "/notifications",
            get(handlers::notification::list).post(handlers::notification::create),
        )
        .route(
            "/notifications/{id}",
            axum::routing::delete(handlers::notification::delete),
        )
        .route(
            "/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
        // Profile, preferences, analytics
        .route(
            "/profile",
            get(handlers::profile::get).put(handlers::profile::update),
        )
        .route(
            "/preferences",
            get(handlers::preferences::get).put(handlers::preferences::update),
        )
        .route("/analytics", get(handlers::analytics::get))
        .route("/analytics/track", post(handlers::analytics::track));

    let mut router = Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if web_dir.is_dir() {
        let serve_dir = ServeDir::new(web_dir).fallback(ServeFile::new(web_dir.join("index.html")));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %web_dir.display(), "SPA static file serving enabled");
    }

    Ok(router)
}

/// GET /health - no auth required. 503 when the database is unreachable.
async fn health_check(
    State(state): State<AppState>,
) -> (StatusCode, axum::Json<serde_json::Value>) {
    let (status, label) = match state.db_pool.ping().await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            tracing::error!(error = %e, "Health check database ping failed");
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };
    (
        status,
        axum::Json(serde_json::json!({
            "status": label,
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}
