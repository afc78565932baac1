//! Graph store provider implementations

/// In-memory code graph
pub mod in_memory;

pub use in_memory::InMemoryGraphStoreProvider;
