//! Null vector search provider
//!
//! Always returns an empty result set. Useful as a stand-in when semantic
//! search is not configured.

use async_trait::async_trait;
use gvs_domain::error::Result;
use gvs_domain::ports::VectorSearchProvider;
use gvs_domain::value_objects::SearchResult;
use serde_json::Value;
use std::collections::HashMap;

/// Null vector search provider
pub struct NullVectorSearchProvider;

impl NullVectorSearchProvider {
    /// Create a null provider
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullVectorSearchProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VectorSearchProvider for NullVectorSearchProvider {
    async fn search_code_examples(
        &self,
        _query: &str,
        _match_count: usize,
        _filter_metadata: Option<&HashMap<String, Value>>,
    ) -> Result<Vec<SearchResult>> {
        Ok(Vec::new())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
