//! Performance caching
//!
//! Bounded key/value cache with per-entry TTL and LRU eviction, plus the
//! stable key derivation used to memoize expensive operations.

/// Stable cache key derivation
pub mod key;
/// TTL/LRU performance cache
pub mod performance;

pub use key::cache_key;
pub use performance::{CacheStats, PerformanceCache};
