//! Validation Orchestration Service
//!
//! Runs the structural validator over a batch of search results, in
//! parallel or sequentially, with per-result caching and graceful fallback
//! when the graph store is disabled or one validation fails.

use crate::domain_services::structural::StructuralValidator;
use gvs_domain::error::Result;
use gvs_domain::value_objects::{SearchResult, ValidatedResult, ValidationOutcome};
use gvs_infrastructure::cache::{PerformanceCache, cache_key};
use gvs_infrastructure::resilience::BatchProcessor;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Cache operation name for validation outcomes
const VALIDATE_OPERATION: &str = "validate_result";

/// Validation orchestrator
///
/// ## Business Rules
///
/// - with no graph store configured, every result gets the fixed neutral
///   outcome (`is_valid = true`, confidence 0.5, `graph_validated = false`)
///   without any graph traffic
/// - cached outcomes are reused per `(source_id, metadata)` key; cache
///   failures degrade to "treat as miss" and are never fatal
/// - one result's validation failure is converted to the neutral fallback
///   for that result only; it never fails the batch
pub struct ValidationOrchestrator {
    validator: Option<Arc<StructuralValidator>>,
    cache: Arc<PerformanceCache>,
    cache_enabled: bool,
    cache_ttl: Duration,
    batch: BatchProcessor,
}

impl ValidationOrchestrator {
    /// Create an orchestrator
    ///
    /// Pass `validator = None` when the graph store is disabled; every
    /// result then receives the neutral outcome.
    pub fn new(
        validator: Option<Arc<StructuralValidator>>,
        cache: Arc<PerformanceCache>,
        cache_enabled: bool,
        cache_ttl: Duration,
        batch: BatchProcessor,
    ) -> Self {
        Self {
            validator,
            cache,
            cache_enabled,
            cache_ttl,
            batch,
        }
    }

    /// Whether structural validation is active
    pub fn graph_enabled(&self) -> bool {
        self.validator.is_some()
    }

    /// Validate a batch of search results
    ///
    /// The output has one entry per input, in input order. This operation
    /// never fails as a whole.
    pub async fn validate(
        &self,
        results: Vec<SearchResult>,
        parallel: bool,
        include_suggestions: bool,
    ) -> Vec<ValidatedResult> {
        let Some(validator) = &self.validator else {
            debug!(
                count = results.len(),
                "Graph store disabled, attaching neutral outcomes"
            );
            return results
                .into_iter()
                .map(|result| ValidatedResult::new(result, ValidationOutcome::neutral()))
                .collect();
        };

        if parallel {
            self.validate_parallel(Arc::clone(validator), results, include_suggestions)
                .await
        } else {
            self.validate_sequential(validator, results, include_suggestions)
                .await
        }
    }

    async fn validate_parallel(
        &self,
        validator: Arc<StructuralValidator>,
        results: Vec<SearchResult>,
        include_suggestions: bool,
    ) -> Vec<ValidatedResult> {
        // Keep originals so a failed slot can still produce a neutral entry
        let originals = results.clone();

        let cache = Arc::clone(&self.cache);
        let cache_enabled = self.cache_enabled;
        let cache_ttl = self.cache_ttl;
        let outcomes = self
            .batch
            .process_batch(results, move |result| {
                let validator = Arc::clone(&validator);
                let cache = Arc::clone(&cache);
                validate_single(
                    validator,
                    cache,
                    cache_enabled,
                    cache_ttl,
                    include_suggestions,
                    result,
                )
            })
            .await;

        outcomes
            .into_iter()
            .zip(originals)
            .map(|(outcome, original)| match outcome {
                Ok(validated) => validated,
                Err(e) => {
                    warn!(error = %e, "Validation task failed, using neutral fallback");
                    ValidatedResult::new(original, ValidationOutcome::neutral_with_error(e.to_string()))
                }
            })
            .collect()
    }

    async fn validate_sequential(
        &self,
        validator: &Arc<StructuralValidator>,
        results: Vec<SearchResult>,
        include_suggestions: bool,
    ) -> Vec<ValidatedResult> {
        let mut validated = Vec::with_capacity(results.len());
        for result in results {
            let original = result.clone();
            let entry = validate_single(
                Arc::clone(validator),
                Arc::clone(&self.cache),
                self.cache_enabled,
                self.cache_ttl,
                include_suggestions,
                result,
            )
            .await
            .unwrap_or_else(|e| {
                warn!(error = %e, "Validation failed, using neutral fallback");
                ValidatedResult::new(original, ValidationOutcome::neutral_with_error(e.to_string()))
            });
            validated.push(entry);
        }
        validated
    }

    /// Drop all cached validation outcomes
    pub async fn clear_cache(&self) -> Result<()> {
        self.cache.clear().await
    }
}

/// Validate one result, consulting the cache first
async fn validate_single(
    validator: Arc<StructuralValidator>,
    cache: Arc<PerformanceCache>,
    cache_enabled: bool,
    cache_ttl: Duration,
    include_suggestions: bool,
    result: SearchResult,
) -> Result<ValidatedResult> {
    let key = outcome_cache_key(&result);

    if cache_enabled {
        match cache.get::<ValidationOutcome>(&key).await {
            Ok(Some(outcome)) => {
                debug!(key = %key, "Reusing cached validation outcome");
                return Ok(ValidatedResult::new(result, outcome));
            }
            Ok(None) => {}
            Err(e) => {
                // Cache failures are never fatal
                warn!(error = %e, "Validation cache read failed, treating as miss");
            }
        }
    }

    let outcome = validator.validate_result(&result, include_suggestions).await;

    if cache_enabled
        && let Err(e) = cache.set(&key, &outcome, Some(cache_ttl)).await
    {
        warn!(error = %e, "Failed to cache validation outcome");
    }

    Ok(ValidatedResult::new(result, outcome))
}

/// Stable cache key for one result's validation outcome
fn outcome_cache_key(result: &SearchResult) -> String {
    let source_id = result.repository_id().unwrap_or_default();
    cache_key(
        VALIDATE_OPERATION,
        &[json!(source_id), json!(result.metadata)],
    )
}

impl std::fmt::Debug for ValidationOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationOrchestrator")
            .field("graph_enabled", &self.graph_enabled())
            .field("cache_enabled", &self.cache_enabled)
            .field("cache_ttl", &self.cache_ttl)
            .finish()
    }
}
