use crate::error::Result;
use crate::value_objects::SearchResult;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

/// Semantic Code Search Interface
///
/// Defines the business contract for vector stores that answer similarity
/// queries over indexed code examples. The store owns embedding the query
/// text; this layer only sees normalized [`SearchResult`] values.
///
/// # Example
///
/// ```ignore
/// use gvs_domain::ports::providers::VectorSearchProvider;
///
/// // Search for code similar to a natural-language query
/// let results = provider
///     .search_code_examples("authentication method", 20, None)
///     .await?;
/// for result in results {
///     println!("{:.2}: {}", result.similarity, result.content);
/// }
/// ```
#[async_trait]
pub trait VectorSearchProvider: Send + Sync {
    /// Run one similarity query against the vector store
    ///
    /// # Arguments
    /// * `query` - Natural-language or code query text
    /// * `match_count` - Maximum number of results to return
    /// * `filter_metadata` - Optional metadata equality filter (e.g. `source`)
    ///
    /// # Returns
    /// Ok(results) ordered by descending similarity, Error if the store
    /// is unreachable or the query failed
    async fn search_code_examples(
        &self,
        query: &str,
        match_count: usize,
        filter_metadata: Option<&HashMap<String, Value>>,
    ) -> Result<Vec<SearchResult>>;

    /// Get the name/identifier of this vector search provider
    fn provider_name(&self) -> &str;

    /// Health check for the provider (default implementation)
    async fn health_check(&self) -> Result<()> {
        // Default implementation - issue a minimal probe query
        self.search_code_examples("__health_check__", 1, None)
            .await?;
        Ok(())
    }
}
