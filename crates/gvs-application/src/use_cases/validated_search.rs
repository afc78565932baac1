//! Validated Code Search Use Case
//!
//! The top-level facade composing semantic search, validation
//! orchestration, confidence scoring, filtering/ranking, and summary
//! statistics. Also exposes cache and health introspection.

use crate::domain_services::{ConfidenceScorer, StructuralValidator, ValidationOrchestrator};
use crate::ports::services::{SearchOptions, ValidatedSearchInterface};
use async_trait::async_trait;
use gvs_domain::constants::METADATA_KEY_SOURCE;
use gvs_domain::error::Result;
use gvs_domain::ports::{GraphStoreProvider, VectorSearchProvider};
use gvs_domain::value_objects::{
    SearchMetadata, SearchResponse, ValidatedResult, ValidationSummary,
};
use gvs_infrastructure::cache::{CacheStats, PerformanceCache};
use gvs_infrastructure::config::AppConfig;
use gvs_infrastructure::health::{HealthMonitor, IntegrationHealth};
use gvs_infrastructure::resilience::{BatchProcessor, CircuitBreaker};
use gvs_infrastructure::utils::{TimedOperation, with_timeout};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

/// Name of the circuit breaker guarding the graph store
const GRAPH_BREAKER_NAME: &str = "graph_store";

/// Validated code search service
///
/// ## Business Rules
///
/// - candidates are over-fetched (factor from config) so that filtering
///   after validation can still fill the requested count
/// - results below the per-request minimum confidence are dropped, the
///   rest are ranked by combined score descending and truncated
/// - the public entry point never raises: pipeline errors become a
///   structured failure response naming the causing error
///
/// # Example
///
/// ```ignore
/// use gvs_application::use_cases::ValidatedCodeSearchService;
/// use gvs_application::ports::services::SearchOptions;
///
/// let service = ValidatedCodeSearchService::new(vector_store, Some(graph_store), config);
/// let response = service
///     .search_and_validate_code("authentication method", SearchOptions::default())
///     .await;
/// assert!(response.success);
/// ```
pub struct ValidatedCodeSearchService {
    vector_store: Arc<dyn VectorSearchProvider>,
    orchestrator: ValidationOrchestrator,
    scorer: ConfidenceScorer,
    monitor: HealthMonitor,
    cache: Arc<PerformanceCache>,
    config: AppConfig,
}

impl ValidatedCodeSearchService {
    /// Create a service over the configured stores
    ///
    /// Pass `graph_store = None` to run without structural validation;
    /// every result then carries the neutral outcome.
    pub fn new(
        vector_store: Arc<dyn VectorSearchProvider>,
        graph_store: Option<Arc<dyn GraphStoreProvider>>,
        config: AppConfig,
    ) -> Self {
        let cache = Arc::new(PerformanceCache::with_config(
            config.cache.max_entries,
            Duration::from_secs(config.cache.default_ttl_secs),
        ));
        let breaker = Arc::new(CircuitBreaker::with_config(
            GRAPH_BREAKER_NAME,
            config.resilience.failure_threshold,
            Duration::from_secs(config.resilience.circuit_timeout_secs),
        ));

        let graph_store = if config.graph_enabled {
            graph_store
        } else {
            None
        };
        let validator = graph_store.as_ref().map(|graph_store| {
            Arc::new(StructuralValidator::new(
                Arc::clone(graph_store),
                Arc::clone(&breaker),
                config.validation.clone(),
                Duration::from_secs(config.search.graph_query_timeout_secs),
            ))
        });

        let orchestrator = ValidationOrchestrator::new(
            validator,
            Arc::clone(&cache),
            config.cache.enabled,
            Duration::from_secs(config.cache.default_ttl_secs),
            BatchProcessor::with_config(
                config.resilience.max_concurrent_validations,
                config.resilience.batch_size,
            ),
        );

        let monitor = HealthMonitor::new(
            Arc::clone(&vector_store),
            graph_store,
            breaker,
            Arc::clone(&cache),
        );

        Self {
            vector_store,
            orchestrator,
            scorer: ConfidenceScorer::new(),
            monitor,
            cache,
            config,
        }
    }

    /// Whether structural validation is active for this service
    pub fn graph_enabled(&self) -> bool {
        self.orchestrator.graph_enabled()
    }

    /// Run the whole pipeline, propagating errors to the public wrapper
    async fn execute(&self, query: &str, options: &SearchOptions) -> Result<SearchResponse> {
        let timer = TimedOperation::start("search_and_validate_code");
        let graph_available = self.graph_enabled();

        // Over-fetch so post-validation filtering can still fill the response
        let candidate_count = options.match_count * self.config.search.candidate_overfetch_factor;
        let filter_metadata = options
            .source_filter
            .as_ref()
            .map(|source| HashMap::from([(METADATA_KEY_SOURCE.to_string(), json!(source))]));

        let candidates = with_timeout(
            "vector_search",
            Duration::from_secs(self.config.search.vector_search_timeout_secs),
            self.vector_store.search_code_examples(
                query,
                candidate_count,
                filter_metadata.as_ref(),
            ),
        )
        .await?;

        if candidates.is_empty() {
            debug!(query = query, "Semantic search returned no candidates");
            return Ok(SearchResponse::success(
                query.to_string(),
                Vec::new(),
                ValidationSummary::empty(graph_available),
                self.metadata(options, 0, timer),
            ));
        }

        let candidates_fetched = candidates.len();
        let validated = self
            .orchestrator
            .validate(
                candidates,
                options.parallel_validation,
                options.include_suggestions,
            )
            .await;

        let (results, summary) = self.filter_and_rank(validated, options, graph_available);

        info!(
            query = query,
            total_found = summary.total_found,
            final_count = summary.final_count,
            "Validated search completed"
        );
        Ok(SearchResponse::success(
            query.to_string(),
            results,
            summary,
            self.metadata(options, candidates_fetched, timer),
        ))
    }

    /// Filter by confidence, rank by combined score, truncate, summarize
    fn filter_and_rank(
        &self,
        validated: Vec<ValidatedResult>,
        options: &SearchOptions,
        graph_available: bool,
    ) -> (Vec<ValidatedResult>, ValidationSummary) {
        let total_found = validated.len();

        let mut results: Vec<ValidatedResult> = validated
            .into_iter()
            .filter(|v| v.validation.confidence_score >= options.min_confidence)
            .collect();
        let validated_count = results.len();

        self.scorer.rank(&mut results);
        results.truncate(options.match_count);
        let final_count = results.len();

        let high_confidence_count = results
            .iter()
            .filter(|v| {
                v.validation.confidence_score >= self.config.validation.high_confidence_threshold
            })
            .count();

        let summary = ValidationSummary::new(
            total_found,
            validated_count,
            final_count,
            high_confidence_count,
            graph_available,
        );
        (results, summary)
    }

    fn metadata(
        &self,
        options: &SearchOptions,
        candidates_fetched: usize,
        timer: TimedOperation,
    ) -> SearchMetadata {
        SearchMetadata {
            requested_count: options.match_count,
            candidates_fetched,
            min_confidence: options.min_confidence,
            parallel_validation: options.parallel_validation,
            duration_ms: timer.finish().as_millis() as u64,
            timestamp: chrono::Utc::now(),
        }
    }
}

#[async_trait]
impl ValidatedSearchInterface for ValidatedCodeSearchService {
    async fn search_and_validate_code(
        &self,
        query: &str,
        options: SearchOptions,
    ) -> SearchResponse {
        match self.execute(query, &options).await {
            Ok(response) => response,
            Err(e) => {
                error!(query = query, error = %e, "Validated search pipeline failed");
                SearchResponse::failure(query.to_string(), e.to_string(), !self.graph_enabled())
            }
        }
    }

    async fn clear_validation_cache(&self) -> Result<()> {
        self.orchestrator.clear_cache().await
    }

    async fn get_cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    async fn get_health_status(&self) -> IntegrationHealth {
        self.monitor.get_integration_health().await
    }
}

/// Builder for [`ValidatedCodeSearchService`]
///
/// Convenience over `new` for call sites that assemble dependencies
/// piecemeal.
#[derive(Default)]
pub struct ValidatedCodeSearchServiceBuilder {
    vector_store: Option<Arc<dyn VectorSearchProvider>>,
    graph_store: Option<Arc<dyn GraphStoreProvider>>,
    config: Option<AppConfig>,
}

impl ValidatedCodeSearchServiceBuilder {
    /// Start an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the vector store (required)
    pub fn vector_store(mut self, vector_store: Arc<dyn VectorSearchProvider>) -> Self {
        self.vector_store = Some(vector_store);
        self
    }

    /// Set the graph store (optional; omit to disable validation)
    pub fn graph_store(mut self, graph_store: Arc<dyn GraphStoreProvider>) -> Self {
        self.graph_store = Some(graph_store);
        self
    }

    /// Set the application configuration (defaults when omitted)
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the service
    pub fn build(self) -> Result<ValidatedCodeSearchService> {
        let vector_store = self.vector_store.ok_or_else(|| {
            gvs_domain::Error::invalid_argument("A vector store is required to build the service")
        })?;
        Ok(ValidatedCodeSearchService::new(
            vector_store,
            self.graph_store,
            self.config.unwrap_or_default(),
        ))
    }
}
