use crate::error::Result;
use crate::value_objects::Embedding;
use async_trait::async_trait;

/// AI Semantic Understanding Interface
///
/// Defines the contract for providers that transform text into semantic
/// embeddings. This layer treats embedding generation as a black box: the
/// vector store consumes embeddings, the search pipeline never inspects
/// them.
///
/// # Default Implementations
///
/// The `embed()` method has a default implementation that delegates to
/// `embed_batch()` with a single item. Providers only need to implement
/// `embed_batch()` unless custom single-item optimization is needed.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get embedding for a single text (default implementation provided)
    async fn embed(&self, text: &str) -> Result<Embedding> {
        // Default: delegate to embed_batch
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| crate::error::Error::embedding("No embedding returned"))
    }

    /// Get embeddings for multiple texts (must be implemented by provider)
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Get the dimensionality of embeddings produced by this provider
    fn dimensions(&self) -> usize;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;

    /// Health check for the provider (default implementation provided)
    async fn health_check(&self) -> Result<()> {
        // Default implementation - try a simple embed operation
        self.embed("health check").await?;
        Ok(())
    }
}
