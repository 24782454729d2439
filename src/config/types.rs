// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;
use std::collections::HashMap;

/// Hardcoded fallback used when `SESSION_SECRET` is not set.
pub const DEFAULT_SESSION_SECRET: &str = "glicelivre-secret-key-development";

/// Environment variable holding the session secret.
pub const SESSION_SECRET_ENV: &str = "SESSION_SECRET";

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    #[serde(default)]
    pub routes: RoutesConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub workers: Option<usize>,
}

/// Session configuration
///
/// The secret is read once at startup and held for the process lifetime.
/// No route mutates it.
#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub secret: String,
}

impl SessionConfig {
    /// True when the process is running on the built-in development secret.
    pub fn is_development_default(&self) -> bool {
        self.secret == DEFAULT_SESSION_SECRET
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    #[serde(default)]
    pub max_connections: Option<u64>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub enable_cors: bool,
    pub max_body_size: u64,
}

/// Routes configuration
///
/// The route table of the app shell: the index page, the static asset
/// tree, and the pinned top-level PWA files that must live outside the
/// static mount (`/manifest.json`, `/sw.js`).
#[derive(Debug, Deserialize, Clone)]
pub struct RoutesConfig {
    /// URL prefix the static tree is mounted under
    #[serde(default = "default_static_mount")]
    pub static_mount: String,
    /// Filesystem directory holding the static tree
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    /// Filesystem path of the fixed index document served at `/`
    #[serde(default = "default_index_page")]
    pub index_page: String,
    /// Exact-path routes serving a single file with a forced content type
    #[serde(default = "default_pinned_routes")]
    pub pinned: HashMap<String, PinnedFile>,
    /// Health check configuration
    #[serde(default)]
    pub health: HealthConfig,
}

/// A single file served at an exact URL path with a declared content type
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PinnedFile {
    pub path: String,
    pub content_type: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_static_mount() -> String {
    "/static".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_static_dir() -> String {
    "static".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_index_page() -> String {
    "templates/index.html".to_string()
}

fn default_pinned_routes() -> HashMap<String, PinnedFile> {
    HashMap::from([
        (
            "/manifest.json".to_string(),
            PinnedFile {
                path: "static/manifest.json".to_string(),
                content_type: "application/json".to_string(),
            },
        ),
        (
            "/sw.js".to_string(),
            PinnedFile {
                path: "static/sw.js".to_string(),
                content_type: "application/javascript".to_string(),
            },
        ),
    ])
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            static_mount: default_static_mount(),
            static_dir: default_static_dir(),
            index_page: default_index_page(),
            pinned: default_pinned_routes(),
            health: HealthConfig::default(),
        }
    }
}

/// Health check configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HealthConfig {
    /// Enable health check endpoints
    #[serde(default = "default_health_enabled")]
    pub enabled: bool,
    /// Liveness probe path (default: /healthz)
    #[serde(default = "default_healthz_path")]
    pub liveness_path: String,
    /// Readiness probe path (default: /readyz)
    #[serde(default = "default_readyz_path")]
    pub readiness_path: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_health_enabled() -> bool {
    true
}

#[allow(clippy::missing_const_for_fn)]
fn default_healthz_path() -> String {
    "/healthz".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_readyz_path() -> String {
    "/readyz".to_string()
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: default_health_enabled(),
            liveness_path: default_healthz_path(),
            readiness_path: default_readyz_path(),
        }
    }
}
