//! HTTP route handlers for the web interface.
//!
//! Routes are organized by content type, with per-route Cache-Control headers.
//! The home page uses a short cache duration so template edits show up quickly,
//! while static assets use a long duration with the immutable hint.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_PAGE, CACHE_CONTROL_STATIC};
use crate::http::static_files::create_static_service;
use crate::middleware::trace_request;
use crate::state::AppState;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Home page - short cache
    let home_routes = Router::new().route("/", get(home::index)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_PAGE),
        ),
    );

    // Static files - long cache with immutable hint
    let static_routes = Router::new()
        .nest_service("/static", create_static_service(&state.config.site))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_STATIC),
        ));

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/api/health", get(health::health));

    Router::new()
        .merge(home_routes)
        .merge(health_routes)
        .merge(static_routes)
        .with_state(state)
        // Outermost layer so the request span covers everything below
        .layer(middleware::from_fn(trace_request))
}
