//! Null embedding provider for testing and development
//!
//! Provides deterministic, hash-based embeddings. No external dependencies,
//! always works offline.

use crate::constants::EMBEDDING_DIMENSION_NULL;
use async_trait::async_trait;
use gvs_domain::error::Result;
use gvs_domain::ports::EmbeddingProvider;
use gvs_domain::value_objects::Embedding;

/// Null embedding provider
///
/// Returns fixed-size vectors derived from the input text hash, so equal
/// inputs always embed identically.
///
/// # Example
///
/// ```rust
/// use gvs_providers::embedding::NullEmbeddingProvider;
/// use gvs_domain::ports::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.dimensions(), 384);
/// assert_eq!(provider.provider_name(), "null");
/// ```
pub struct NullEmbeddingProvider;

impl NullEmbeddingProvider {
    /// Create a new null embedding provider
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let embeddings = texts
            .iter()
            .map(|text| {
                let hash = text.chars().map(|c| c as u32).sum::<u32>();
                let base_value = (hash % 1000) as f32 / 1000.0;

                let vector = (0..EMBEDDING_DIMENSION_NULL)
                    .map(|j| {
                        let variation = (j as f32 * 0.01).sin();
                        (base_value + variation * 0.1).clamp(0.0, 1.0)
                    })
                    .collect();

                Embedding {
                    vector,
                    model: "null".to_string(),
                    dimensions: EMBEDDING_DIMENSION_NULL,
                }
            })
            .collect();

        Ok(embeddings)
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIMENSION_NULL
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
