//! Embedding provider implementations

/// Deterministic hash-based provider
pub mod null;

pub use null::NullEmbeddingProvider;
