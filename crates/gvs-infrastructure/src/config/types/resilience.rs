//! Resilience configuration types

use crate::constants::*;
use serde::{Deserialize, Serialize};

/// Circuit breaker and batch processing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResilienceConfig {
    /// Consecutive failures before the graph store breaker opens
    pub failure_threshold: u32,

    /// Seconds the breaker stays open before allowing a trial call
    pub circuit_timeout_secs: u64,

    /// Maximum number of concurrent structural validations
    pub max_concurrent_validations: usize,

    /// Validation batch chunk size
    pub batch_size: usize,
}

impl Default for ResilienceConfig {
    fn default() -> Self {
        Self {
            failure_threshold: CIRCUIT_BREAKER_FAILURE_THRESHOLD,
            circuit_timeout_secs: CIRCUIT_BREAKER_TIMEOUT_SECS,
            max_concurrent_validations: BATCH_MAX_CONCURRENT,
            batch_size: BATCH_SIZE,
        }
    }
}
