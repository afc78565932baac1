//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `gvs_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "gvs.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "gvs";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "GVS";

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Default cache TTL in seconds (1 hour)
pub const CACHE_DEFAULT_TTL_SECS: u64 = 3600;

/// Default cache capacity in entries
pub const CACHE_DEFAULT_MAX_ENTRIES: usize = 1000;

// ============================================================================
// RESILIENCE CONSTANTS
// ============================================================================

/// Circuit breaker failure threshold
pub const CIRCUIT_BREAKER_FAILURE_THRESHOLD: u32 = 5;

/// Circuit breaker open-state timeout in seconds
pub const CIRCUIT_BREAKER_TIMEOUT_SECS: u64 = 60;

/// Maximum in-flight items in a processing batch
pub const BATCH_MAX_CONCURRENT: usize = 10;

/// Number of items grouped per batch submission
pub const BATCH_SIZE: usize = 20;

// ============================================================================
// TIMEOUT CONSTANTS
// ============================================================================

/// Vector similarity search timeout in seconds
pub const VECTOR_SEARCH_TIMEOUT_SECS: u64 = 30;

/// Per-statement graph query timeout in seconds
pub const GRAPH_QUERY_TIMEOUT_SECS: u64 = 10;

/// Health check probe timeout in seconds
pub const HEALTH_CHECK_TIMEOUT_SECS: u64 = 5;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log file rotation size in bytes (10MB)
pub const LOG_ROTATION_SIZE: u64 = 10 * 1024 * 1024;

/// Maximum number of log files to keep
pub const LOG_MAX_FILES: usize = 5;

// Re-export domain constants for convenience
pub use gvs_domain::constants::*;
