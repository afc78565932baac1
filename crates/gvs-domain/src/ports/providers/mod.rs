//! External Provider Ports
//!
//! Ports for the external stores this layer depends on. These interfaces
//! carry the abstract contracts only; wire protocols belong to the adapters.
//!
//! ## Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`VectorSearchProvider`] | Semantic similarity search over code examples |
//! | [`GraphStoreProvider`] | Scoped sessions against the code knowledge graph |
//! | [`EmbeddingProvider`] | Text embedding generation services |

/// Embedding provider port
pub mod embedding;
/// Graph store provider port
pub mod graph_store;
/// Vector search provider port
pub mod vector_store;

// Re-export provider ports for convenience
pub use embedding::EmbeddingProvider;
pub use graph_store::{GraphRecord, GraphSession, GraphStoreProvider};
pub use vector_store::VectorSearchProvider;
