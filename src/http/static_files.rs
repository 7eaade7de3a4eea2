//! Static file serving for the asset directory.

use tower_http::services::ServeDir;

use crate::config::SiteConfig;

/// Create a static file service for the configured asset directory.
///
/// Returns a `ServeDir` service rooted at `site.static_dir`. Requests for
/// files that do not exist fall through to the service's default 404.
pub fn create_static_service(site: &SiteConfig) -> ServeDir {
    ServeDir::new(&site.static_dir)
}
