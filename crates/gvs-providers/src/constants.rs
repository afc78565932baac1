//! Provider-specific constants

/// Dimension of the null embedding provider's vectors (matches common
/// sentence-embedding models)
pub const EMBEDDING_DIMENSION_NULL: usize = 384;
