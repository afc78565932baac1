//! # Graph-Validated Search - Provider Implementations
//!
//! This crate contains the store provider implementations. Each provider
//! implements a port (trait) defined in `gvs-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Vector Search | `VectorSearchProvider` | InMemory, Null |
//! | Graph Store | `GraphStoreProvider` | InMemory |
//! | Embedding | `EmbeddingProvider` | Null |
//!
//! The in-memory providers double as test fakes: they answer the same
//! queries a production adapter would, support failure injection, and keep
//! everything deterministic.

// Re-export gvs-domain types commonly used with providers
pub use gvs_domain::error::{Error, Result};
pub use gvs_domain::ports::{EmbeddingProvider, GraphStoreProvider, VectorSearchProvider};

/// Provider-specific constants
pub mod constants;

/// Embedding provider implementations
pub mod embedding;

/// Graph store provider implementations
pub mod graph_store;

/// Vector search provider implementations
pub mod vector_search;
