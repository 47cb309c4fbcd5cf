//! Top-level router.
//!
//! - `GET  /{code}`   - short link redirect (counts the click)
//! - `GET  /healthz`  - health check
//! - `/api/*`         - link management REST API
//!
//! Request tracing and trailing-slash normalization wrap every route.

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Assembles the full router with middleware applied.
///
/// The redirect route captures at the root; `/api` and `/healthz` are
/// matched first, and codes colliding with those path segments can't exist
/// since they fail the code format contract.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/healthz", get(health_handler))
        .nest("/api", api::routes::routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
