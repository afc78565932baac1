//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and default values, with validation of the merged result.

use crate::config::AppConfig;
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::log_config_loaded;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use gvs_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `GVS_SEARCH_DEFAULT_MATCH_COUNT`)
    pub fn load(&self) -> Result<AppConfig> {
        // Start with default configuration
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        // Add configuration file if specified
        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else {
            // Try to find default config file
            if let Some(default_path) = Self::find_default_config_path()
                && default_path.exists()
            {
                figment = figment.merge(Toml::file(&default_path));
                log_config_loaded(&default_path, true);
            }
        }

        // Add environment variables
        // Uses underscore as separator for nested keys (e.g., GVS_CACHE_MAX_ENTRIES)
        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("_"));

        // Extract and deserialize configuration
        let app_config: AppConfig = figment
            .extract()
            .context("Failed to extract configuration")?;

        // Validate configuration
        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Reload configuration (useful for hot-reloading)
    pub fn reload(&self) -> Result<AppConfig> {
        self.load()
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find default configuration file paths to try
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        // Try various common config file locations
        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
            dirs::home_dir()
                .map(|d| {
                    d.join(format!(".{}", DEFAULT_CONFIG_DIR))
                        .join(DEFAULT_CONFIG_FILENAME)
                })
                .unwrap_or_default(),
        ];

        candidates.into_iter().find(|path| path.exists())
    }
}

/// Validate application configuration
///
/// Performs validation of all configuration sections.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_search_config(config)?;
    validate_validation_config(config)?;
    validate_cache_config(config)?;
    validate_resilience_config(config)?;
    Ok(())
}

fn validate_search_config(config: &AppConfig) -> Result<()> {
    if config.search.default_match_count == 0 {
        return Err(Error::Configuration {
            message: "Default match count cannot be 0".to_string(),
            source: None,
        });
    }
    if config.search.candidate_overfetch_factor == 0 {
        return Err(Error::Configuration {
            message: "Candidate over-fetch factor cannot be 0".to_string(),
            source: None,
        });
    }
    if config.search.vector_search_timeout_secs == 0 || config.search.graph_query_timeout_secs == 0
    {
        return Err(Error::Configuration {
            message: "Search timeouts cannot be 0".to_string(),
            source: None,
        });
    }
    Ok(())
}

fn validate_validation_config(config: &AppConfig) -> Result<()> {
    let v = &config.validation;
    if !(0.0..=1.0).contains(&v.min_confidence_threshold)
        || !(0.0..=1.0).contains(&v.high_confidence_threshold)
    {
        return Err(Error::Configuration {
            message: "Confidence thresholds must be between 0.0 and 1.0".to_string(),
            source: None,
        });
    }
    if v.high_confidence_threshold < v.min_confidence_threshold {
        return Err(Error::Configuration {
            message: "High-confidence threshold cannot be below the minimum confidence threshold"
                .to_string(),
            source: None,
        });
    }
    let weights = [
        v.repository_check_weight,
        v.class_check_weight,
        v.structure_check_weight,
        v.method_check_weight,
        v.signature_check_weight,
        v.function_check_weight,
    ];
    if weights.iter().any(|w| *w <= 0.0) {
        return Err(Error::Configuration {
            message: "Structural check weights must be positive".to_string(),
            source: None,
        });
    }
    Ok(())
}

fn validate_cache_config(config: &AppConfig) -> Result<()> {
    if config.cache.enabled {
        if config.cache.default_ttl_secs == 0 {
            return Err(Error::Configuration {
                message: "Cache TTL cannot be 0 when cache is enabled".to_string(),
                source: None,
            });
        }
        if config.cache.max_entries == 0 {
            return Err(Error::Configuration {
                message: "Cache capacity cannot be 0 when cache is enabled".to_string(),
                source: None,
            });
        }
    }
    Ok(())
}

fn validate_resilience_config(config: &AppConfig) -> Result<()> {
    let r = &config.resilience;
    if r.failure_threshold == 0 {
        return Err(Error::Configuration {
            message: "Circuit breaker failure threshold cannot be 0".to_string(),
            source: None,
        });
    }
    if r.circuit_timeout_secs == 0 {
        return Err(Error::Configuration {
            message: "Circuit breaker timeout cannot be 0".to_string(),
            source: None,
        });
    }
    if r.max_concurrent_validations == 0 || r.batch_size == 0 {
        return Err(Error::Configuration {
            message: "Batch concurrency and chunk size cannot be 0".to_string(),
            source: None,
        });
    }
    Ok(())
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration builder for programmatic configuration
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Enable or disable graph validation
    pub fn with_graph_enabled(mut self, enabled: bool) -> Self {
        self.config.graph_enabled = enabled;
        self
    }

    /// Set search configuration
    pub fn with_search(mut self, search: crate::config::SearchConfig) -> Self {
        self.config.search = search;
        self
    }

    /// Set validation configuration
    pub fn with_validation(mut self, validation: crate::config::ValidationConfig) -> Self {
        self.config.validation = validation;
        self
    }

    /// Set cache configuration
    pub fn with_cache(mut self, cache: crate::config::CacheConfig) -> Self {
        self.config.cache = cache;
        self
    }

    /// Set resilience configuration
    pub fn with_resilience(mut self, resilience: crate::config::ResilienceConfig) -> Self {
        self.config.resilience = resilience;
        self
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: crate::config::LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
