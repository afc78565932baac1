//! Domain Port Interfaces
//!
//! Defines all boundary contracts between the domain and external layers.
//! Ports follow the Dependency Inversion Principle: the domain defines the
//! interfaces, providers and infrastructure implement them.
//!
//! ## Organization
//!
//! - **providers/** - External store provider ports (vector search, graph
//!   store, embeddings)

/// External service provider ports
pub mod providers;

// Re-export commonly used port traits for convenience
pub use providers::{
    EmbeddingProvider, GraphRecord, GraphSession, GraphStoreProvider, VectorSearchProvider,
};
