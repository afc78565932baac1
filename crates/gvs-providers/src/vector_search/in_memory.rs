//! In-memory vector search provider implementation
//!
//! Fixture-backed search provider for development and testing. Results are
//! registered up front; a search returns them filtered by metadata and
//! ordered by similarity. Nothing is persisted.

use async_trait::async_trait;
use dashmap::DashMap;
use gvs_domain::error::{Error, Result};
use gvs_domain::ports::VectorSearchProvider;
use gvs_domain::value_objects::SearchResult;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// In-memory vector search provider
///
/// ## Behavior
///
/// - `search_code_examples` returns all registered results whose metadata
///   matches every `filter_metadata` entry, ordered by similarity
///   descending, truncated to `match_count`
/// - `fail_next` arms a one-shot failure so callers can exercise the
///   degraded paths
pub struct InMemoryVectorSearchProvider {
    results: DashMap<usize, SearchResult>,
    next_id: AtomicUsize,
    fail_next: AtomicBool,
}

impl InMemoryVectorSearchProvider {
    /// Create an empty provider
    pub fn new() -> Self {
        Self {
            results: DashMap::new(),
            next_id: AtomicUsize::new(0),
            fail_next: AtomicBool::new(false),
        }
    }

    /// Create a provider pre-loaded with fixture results
    pub fn with_results(results: Vec<SearchResult>) -> Self {
        let provider = Self::new();
        for result in results {
            provider.add_result(result);
        }
        provider
    }

    /// Register one fixture result
    pub fn add_result(&self, result: SearchResult) {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.results.insert(id, result);
    }

    /// Make the next search call fail
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    fn matches_filter(result: &SearchResult, filter: Option<&HashMap<String, Value>>) -> bool {
        match filter {
            Some(filter) => filter
                .iter()
                .all(|(key, value)| result.metadata.get(key) == Some(value)),
            None => true,
        }
    }
}

impl Default for InMemoryVectorSearchProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VectorSearchProvider for InMemoryVectorSearchProvider {
    async fn search_code_examples(
        &self,
        _query: &str,
        match_count: usize,
        filter_metadata: Option<&HashMap<String, Value>>,
    ) -> Result<Vec<SearchResult>> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(Error::vector_db("Injected vector store failure"));
        }

        let mut hits: Vec<SearchResult> = self
            .results
            .iter()
            .filter(|entry| Self::matches_filter(entry.value(), filter_metadata))
            .map(|entry| entry.value().clone())
            .collect();
        hits.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        hits.truncate(match_count);
        Ok(hits)
    }

    fn provider_name(&self) -> &str {
        "in_memory"
    }
}
