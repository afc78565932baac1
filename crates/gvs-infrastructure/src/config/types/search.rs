//! Search pipeline configuration types

use crate::constants::*;
use serde::{Deserialize, Serialize};

/// Search pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of results returned when the caller does not specify one
    pub default_match_count: usize,

    /// Candidate over-fetch multiplier applied before validation filtering
    pub candidate_overfetch_factor: usize,

    /// Vector search timeout in seconds
    pub vector_search_timeout_secs: u64,

    /// Per-query graph store timeout in seconds
    pub graph_query_timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_match_count: DEFAULT_MATCH_COUNT,
            candidate_overfetch_factor: CANDIDATE_OVERFETCH_FACTOR,
            vector_search_timeout_secs: VECTOR_SEARCH_TIMEOUT_SECS,
            graph_query_timeout_secs: GRAPH_QUERY_TIMEOUT_SECS,
        }
    }
}
