// Configuration module entry point
// Loads layered configuration: config.toml, environment, built-in defaults

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, HealthConfig, HttpConfig, LoggingConfig, PerformanceConfig, PinnedFile, RoutesConfig,
    ServerConfig, SessionConfig, DEFAULT_SESSION_SECRET, SESSION_SECRET_ENV,
};

impl Config {
    /// Load configuration from the default "config.toml" next to the binary
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the specified file path (without extension)
    ///
    /// The file is optional; every key has a built-in default so the server
    /// runs with no configuration at all. `GLICELIVRE_`-prefixed environment
    /// variables override file values, and `SESSION_SECRET` overrides the
    /// session secret specifically.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        Self::load_with_secret(config_path, std::env::var(SESSION_SECRET_ENV).ok())
    }

    /// Load configuration with an explicit session secret override.
    ///
    /// Separated from `load_from` so tests can exercise the secret layering
    /// without mutating process environment.
    pub(crate) fn load_with_secret(
        config_path: &str,
        secret: Option<String>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("GLICELIVRE").separator("_"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("session.secret", DEFAULT_SESSION_SECRET)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 10_485_760)?; // 10MB

        if let Some(secret) = secret {
            builder = builder.set_override("session.secret", secret)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Config {
        // A path that matches no file: pure built-in defaults
        Config::load_with_secret("tests-no-such-config", None).expect("defaults must load")
    }

    #[test]
    fn test_default_bind_address() {
        let cfg = defaults();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 5000);
        assert_eq!(cfg.socket_addr().unwrap().port(), 5000);
    }

    #[test]
    fn test_default_session_secret() {
        let cfg = defaults();
        assert_eq!(cfg.session.secret, DEFAULT_SESSION_SECRET);
        assert!(cfg.session.is_development_default());
    }

    #[test]
    fn test_session_secret_override() {
        let cfg = Config::load_with_secret("tests-no-such-config", Some("prod-secret".to_string()))
            .expect("config must load");
        assert_eq!(cfg.session.secret, "prod-secret");
        assert!(!cfg.session.is_development_default());
    }

    #[test]
    fn test_default_routes() {
        let cfg = defaults();
        assert_eq!(cfg.routes.static_mount, "/static");
        assert_eq!(cfg.routes.static_dir, "static");
        assert_eq!(cfg.routes.index_page, "templates/index.html");

        let manifest = cfg.routes.pinned.get("/manifest.json").expect("manifest route");
        assert_eq!(manifest.path, "static/manifest.json");
        assert_eq!(manifest.content_type, "application/json");

        let sw = cfg.routes.pinned.get("/sw.js").expect("service worker route");
        assert_eq!(sw.path, "static/sw.js");
        assert_eq!(sw.content_type, "application/javascript");
    }

    #[test]
    fn test_default_health_probes() {
        let cfg = defaults();
        assert!(cfg.routes.health.enabled);
        assert_eq!(cfg.routes.health.liveness_path, "/healthz");
        assert_eq!(cfg.routes.health.readiness_path, "/readyz");
    }
}
