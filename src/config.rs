//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines constants for
//! HTTP cache TTLs, default paths, and the health-check payload. `AppConfig`
//! is the root configuration struct containing all settings.

use const_format::formatcp;
use serde::{Deserialize, Serialize};
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// These constants control Cache-Control headers for upstream caches (nginx, CDNs).
// All values are in seconds.

/// Home page - content only changes on deploy, but keep the TTL short so
/// template edits show up quickly
pub const HTTP_CACHE_PAGE_MAX_AGE: u32 = 60;
pub const HTTP_CACHE_PAGE_SWR: u32 = 30;

/// Static assets (CSS, JS) - long cache with immutable hint
pub const HTTP_CACHE_STATIC_MAX_AGE: u32 = 86400;

// Pre-formatted Cache-Control header values (compile-time string concatenation)
pub const CACHE_CONTROL_PAGE: &str = formatcp!(
    "public, max-age={}, stale-while-revalidate={}",
    HTTP_CACHE_PAGE_MAX_AGE,
    HTTP_CACHE_PAGE_SWR
);

pub const CACHE_CONTROL_STATIC: &str =
    formatcp!("public, max-age={}, immutable", HTTP_CACHE_STATIC_MAX_AGE);

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default directory containing Tera templates
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Default directory for static assets
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Default site name shown in page titles and the health message
pub const DEFAULT_SITE_NAME: &str = "Pokemon Probability Academy";

/// Message returned by the health-check endpoint
pub const HEALTH_MESSAGE: &str = "Pokemon Probability Academy is running!";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "pokeacademy=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Site settings (name, template and static asset locations)
    #[serde(default)]
    pub site: SiteConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

/// Site settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Site title shown in page headings
    #[serde(default = "SiteConfig::default_name")]
    pub name: String,
    /// Directory containing Tera templates
    #[serde(default = "SiteConfig::default_templates_dir")]
    pub templates_dir: String,
    /// Directory served under /static
    #[serde(default = "SiteConfig::default_static_dir")]
    pub static_dir: String,
    /// Version string, populated at runtime
    #[serde(skip_deserializing, default = "SiteConfig::default_version")]
    pub version: String,
}

impl SiteConfig {
    fn default_name() -> String {
        DEFAULT_SITE_NAME.to_string()
    }

    fn default_templates_dir() -> String {
        DEFAULT_TEMPLATES_DIR.to_string()
    }

    fn default_static_dir() -> String {
        DEFAULT_STATIC_DIR.to_string()
    }

    fn default_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Glob pattern matching every template under the configured directory
    pub fn template_glob(&self) -> String {
        format!("{}/**/*", self.templates_dir)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: Self::default_name(),
            templates_dir: Self::default_templates_dir(),
            static_dir: Self::default_static_dir(),
            version: Self::default_version(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;

        // Validate: the template directory must exist at startup
        if !Path::new(&config.site.templates_dir).is_dir() {
            return Err(ConfigError::Validation(format!(
                "Template directory '{}' does not exist",
                config.site.templates_dir
            )));
        }

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_config_with_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [http]
            host = "127.0.0.1"
            port = 3000
            "#,
        )
        .unwrap();

        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 3000);
        assert_eq!(config.site.name, DEFAULT_SITE_NAME);
        assert_eq!(config.site.templates_dir, DEFAULT_TEMPLATES_DIR);
        assert_eq!(config.site.static_dir, DEFAULT_STATIC_DIR);
        assert_eq!(config.logging.format, DEFAULT_LOG_FORMAT);
    }

    #[test]
    fn parses_full_config() {
        let config: AppConfig = toml::from_str(
            r#"
            [http]
            host = "0.0.0.0"
            port = 8080

            [site]
            name = "Academy Staging"
            templates_dir = "themes/staging/templates"
            static_dir = "themes/staging/static"

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.site.name, "Academy Staging");
        assert_eq!(
            config.site.template_glob(),
            "themes/staging/templates/**/*"
        );
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn missing_http_section_is_an_error() {
        let result: Result<AppConfig, _> = toml::from_str("[site]\nname = \"x\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_rejects_missing_template_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[http]\nhost = \"127.0.0.1\"\nport = 0\n\n[site]\ntemplates_dir = \"/nonexistent/templates\"\n",
        )
        .unwrap();

        match AppConfig::load(&path) {
            Err(ConfigError::Validation(msg)) => assert!(msg.contains("/nonexistent/templates")),
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }
}
