//! Vector search provider implementations

/// In-memory fixture-backed provider
pub mod in_memory;
/// Provider that always returns no results
pub mod null;

pub use in_memory::InMemoryVectorSearchProvider;
pub use null::NullVectorSearchProvider;
