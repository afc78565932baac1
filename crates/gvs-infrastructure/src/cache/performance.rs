//! TTL/LRU performance cache
//!
//! Bounded in-memory cache with per-entry TTL, lazy expiration, and
//! least-recently-used eviction. All bookkeeping (hit/miss/eviction
//! counters, recency order) is deterministic and observable through
//! [`CacheStats`], which is why this is hand-rolled rather than delegated
//! to an off-the-shelf concurrent cache.

use crate::constants::{CACHE_DEFAULT_MAX_ENTRIES, CACHE_DEFAULT_TTL_SECS};
use gvs_domain::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Cache Operation Statistics
///
/// Snapshot of cache performance counters.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CacheStats {
    /// Number of live entries
    pub size: usize,
    /// Maximum number of entries
    pub max_size: usize,
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of LRU evictions
    pub evictions: u64,
    /// Cache hit rate (0.0 to 1.0)
    pub hit_rate: f64,
}

/// One stored entry with its TTL bookkeeping
struct CacheEntry {
    value: String,
    inserted_at: Instant,
    ttl: Duration,
    last_access: Instant,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.inserted_at) > self.ttl
    }
}

/// Mutable cache state guarded by one lock
///
/// Insert/evict and the counters must move together atomically with
/// respect to concurrent callers, so they live behind a single mutex.
struct CacheInner {
    entries: HashMap<String, CacheEntry>,
    hits: u64,
    misses: u64,
    evictions: u64,
}

/// Bounded key/value cache with per-entry TTL and LRU eviction
///
/// # Semantics
///
/// - `get` refreshes recency on a hit; an entry past its TTL is removed and
///   reported as a miss (lazy expiration — no background sweeper)
/// - `set` at capacity evicts the entry with the oldest access time before
///   inserting, so size never exceeds `max_size`
/// - values are stored as JSON, with typed get/set wrappers
///
/// # Example
///
/// ```ignore
/// use gvs_infrastructure::cache::PerformanceCache;
/// use std::time::Duration;
///
/// let cache = PerformanceCache::with_config(1000, Duration::from_secs(3600));
/// cache.set("key", &outcome, None).await?;
/// if let Some(cached) = cache.get::<ValidationOutcome>("key").await? {
///     // reuse
/// }
/// ```
pub struct PerformanceCache {
    inner: Mutex<CacheInner>,
    max_size: usize,
    default_ttl: Duration,
}

impl Default for PerformanceCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PerformanceCache {
    /// Create a cache with default capacity and TTL
    pub fn new() -> Self {
        Self::with_config(
            CACHE_DEFAULT_MAX_ENTRIES,
            Duration::from_secs(CACHE_DEFAULT_TTL_SECS),
        )
    }

    /// Create a cache with explicit capacity and default TTL
    pub fn with_config(max_size: usize, default_ttl: Duration) -> Self {
        Self {
            inner: Mutex::new(CacheInner {
                entries: HashMap::new(),
                hits: 0,
                misses: 0,
                evictions: 0,
            }),
            max_size: max_size.max(1),
            default_ttl,
        }
    }

    /// Maximum number of entries
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Get a typed value from the cache
    pub async fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        match self.get_json(key).await? {
            Some(json) => {
                let value: T = serde_json::from_str(&json).map_err(|e| {
                    Error::cache(format!("Failed to deserialize cached value: {}", e))
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Get a raw JSON value from the cache
    ///
    /// Returns `None` for both absent and expired keys; an expired entry is
    /// removed on the way out.
    pub async fn get_json(&self, key: &str) -> Result<Option<String>> {
        let now = Instant::now();
        let mut inner = self.inner.lock().await;

        let mut expired = false;
        if let Some(entry) = inner.entries.get_mut(key) {
            if entry.is_expired(now) {
                expired = true;
            } else {
                entry.last_access = now;
                let value = entry.value.clone();
                inner.hits += 1;
                return Ok(Some(value));
            }
        }

        if expired {
            inner.entries.remove(key);
        }
        inner.misses += 1;
        Ok(None)
    }

    /// Set a typed value in the cache
    pub async fn set<T>(&self, key: &str, value: &T, ttl: Option<Duration>) -> Result<()>
    where
        T: serde::Serialize,
    {
        let json = serde_json::to_string(value)
            .map_err(|e| Error::cache(format!("Failed to serialize value for cache: {}", e)))?;
        self.set_json(key, json, ttl).await
    }

    /// Set a raw JSON value in the cache
    ///
    /// When the cache is full and `key` is new, the least-recently-accessed
    /// entry is evicted first.
    pub async fn set_json(&self, key: &str, value: String, ttl: Option<Duration>) -> Result<()> {
        let now = Instant::now();
        let ttl = ttl.unwrap_or(self.default_ttl);
        let mut inner = self.inner.lock().await;

        if !inner.entries.contains_key(key) && inner.entries.len() >= self.max_size {
            let oldest = inner
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_access)
                .map(|(k, _)| k.clone());
            if let Some(oldest_key) = oldest {
                inner.entries.remove(&oldest_key);
                inner.evictions += 1;
            }
        }

        inner.entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                inserted_at: now,
                ttl,
                last_access: now,
            },
        );
        Ok(())
    }

    /// Remove all entries, keeping the counters
    pub async fn clear(&self) -> Result<()> {
        let mut inner = self.inner.lock().await;
        inner.entries.clear();
        Ok(())
    }

    /// Get a statistics snapshot
    pub async fn stats(&self) -> CacheStats {
        let inner = self.inner.lock().await;
        let total = inner.hits + inner.misses;
        let hit_rate = if total > 0 {
            inner.hits as f64 / total as f64
        } else {
            0.0
        };
        CacheStats {
            size: inner.entries.len(),
            max_size: self.max_size,
            hits: inner.hits,
            misses: inner.misses,
            evictions: inner.evictions,
            hit_rate,
        }
    }
}

impl std::fmt::Debug for PerformanceCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerformanceCache")
            .field("max_size", &self.max_size)
            .field("default_ttl", &self.default_ttl)
            .finish()
    }
}
