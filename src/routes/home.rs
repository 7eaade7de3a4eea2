//! Handler for the home page.
//!
//! Renders the single-page academy article from the `index.html` template.

use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

/// Home page handler rendering the academy article.
#[instrument(name = "home::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut context = tera::Context::new();
    context.insert("site", &state.config.site);

    let html = state.tera.render("index.html", &context)?;
    Ok(Html(html))
}
