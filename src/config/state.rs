// Application state module
// Immutable process-wide state shared by all connections

use super::types::{Config, RoutesConfig};

/// Application state
///
/// Configuration is read once at startup and never mutated afterwards;
/// request handlers share it read-only behind an `Arc`.
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Whether per-request access logging is enabled
    pub const fn access_log(&self) -> bool {
        self.config.logging.access_log
    }

    pub const fn routes(&self) -> &RoutesConfig {
        &self.config.routes
    }
}
