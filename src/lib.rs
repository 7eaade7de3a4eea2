//! Pokemon Probability Academy web server.
//!
//! A small Axum application that renders the academy's single-page article
//! from a Tera template and exposes a JSON health-check endpoint. Static
//! assets are served from a configurable directory.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod templates;
