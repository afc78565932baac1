//! Resilience primitives
//!
//! Generic failure-isolation building blocks protecting the search pipeline
//! when a backing store is slow, unavailable, or partially failing.

/// Concurrency-bounded batch execution
pub mod batch;
/// Three-state circuit breaker
pub mod circuit_breaker;

pub use batch::BatchProcessor;
pub use circuit_breaker::{CircuitBreaker, CircuitBreakerSnapshot, CircuitState};
