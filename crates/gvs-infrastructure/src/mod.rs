//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain
//! layers: the performance cache, the resilience primitives protecting calls
//! into the backing stores, health monitoring, configuration, and logging.
//!
//! ## Module Categories
//!
//! ### Data & Caching
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | TTL/LRU performance cache with stable key derivation |
//!
//! ### Resilience
//! | Module | Description |
//! |--------|-------------|
//! | [`resilience`] | Circuit breaker and concurrency-bounded batch processor |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via figment |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`health`] | Store health probes and aggregate availability |
//! | [`logging`] | Structured logging with tracing |

// Core infrastructure modules
pub mod cache;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod health;
pub mod logging;
pub mod resilience;
pub mod utils;

// Re-export commonly used types
pub use cache::{CacheStats, PerformanceCache};
pub use error_ext::ErrorContext;
pub use resilience::{BatchProcessor, CircuitBreaker, CircuitState};
pub use utils::{TimedOperation, with_timeout};
