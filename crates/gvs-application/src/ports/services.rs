//! Application Service Port Interfaces
//!
//! Defines the port interfaces for application layer services. These traits
//! are the contracts that application services implement and that outer
//! layers depend on.

use async_trait::async_trait;
use gvs_domain::SearchResponse;
use gvs_domain::constants::{DEFAULT_MATCH_COUNT, MIN_CONFIDENCE_THRESHOLD};
use gvs_domain::error::Result;
use gvs_infrastructure::cache::CacheStats;
use gvs_infrastructure::health::IntegrationHealth;

/// Per-request options for a validated search
///
/// ## Business Rules
///
/// - `match_count` is the size of the final response, not the candidate
///   fetch size; the pipeline over-fetches internally
/// - `min_confidence` filters results after validation
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Number of results to return
    pub match_count: usize,
    /// Restrict results to one source repository
    pub source_filter: Option<String>,
    /// Minimum confidence score for a result to be returned
    pub min_confidence: f64,
    /// Generate remediation suggestions for low-confidence results
    pub include_suggestions: bool,
    /// Validate candidates concurrently
    pub parallel_validation: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            match_count: DEFAULT_MATCH_COUNT,
            source_filter: None,
            min_confidence: MIN_CONFIDENCE_THRESHOLD,
            include_suggestions: true,
            parallel_validation: true,
        }
    }
}

/// Validated Search Service Interface
///
/// The contract for the top-level search facade. `search_and_validate_code`
/// is infallible by design: pipeline errors become structured failure
/// responses instead of propagating.
#[async_trait]
pub trait ValidatedSearchInterface: Send + Sync {
    /// Run a semantic search and validate the results against the graph store
    async fn search_and_validate_code(&self, query: &str, options: SearchOptions)
    -> SearchResponse;

    /// Drop all cached validation outcomes
    async fn clear_validation_cache(&self) -> Result<()>;

    /// Snapshot the validation cache counters
    async fn get_cache_stats(&self) -> CacheStats;

    /// Probe the backing stores and report aggregate availability
    async fn get_health_status(&self) -> IntegrationHealth;
}
