//! Main application configuration

use serde::{Deserialize, Serialize};

pub use super::cache::CacheConfig;
pub use super::logging::LoggingConfig;
pub use super::resilience::ResilienceConfig;
pub use super::search::SearchConfig;
pub use super::validation::ValidationConfig;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Graph validation enabled (search falls back to unvalidated results
    /// when disabled)
    #[serde(default = "default_graph_enabled")]
    pub graph_enabled: bool,

    /// Search pipeline configuration
    #[serde(default)]
    pub search: SearchConfig,

    /// Validation scoring configuration
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Validation cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Resilience configuration
    #[serde(default)]
    pub resilience: ResilienceConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_graph_enabled() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            graph_enabled: default_graph_enabled(),
            search: SearchConfig::default(),
            validation: ValidationConfig::default(),
            cache: CacheConfig::default(),
            resilience: ResilienceConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
