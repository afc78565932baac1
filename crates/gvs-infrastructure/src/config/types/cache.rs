//! Cache configuration types

use crate::constants::*;
use serde::{Deserialize, Serialize};

/// Validation cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache enabled
    pub enabled: bool,

    /// Default TTL in seconds
    pub default_ttl_secs: u64,

    /// Maximum number of cached validation outcomes
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_ttl_secs: CACHE_DEFAULT_TTL_SECS,
            max_entries: CACHE_DEFAULT_MAX_ENTRIES,
        }
    }
}
