//! Configuration management
//!
//! TOML + environment configuration via figment. Defaults come from the
//! centralized constants, a `gvs.toml` file overrides them, and `GVS_`
//! prefixed environment variables override the file.

/// Configuration loading and validation
pub mod loader;
/// Configuration type definitions
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{
    AppConfig, CacheConfig, LoggingConfig, ResilienceConfig, SearchConfig, ValidationConfig,
};
