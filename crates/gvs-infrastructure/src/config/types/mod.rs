//! Configuration type definitions

/// Main application configuration
pub mod app;
/// Cache configuration
pub mod cache;
/// Logging configuration
pub mod logging;
/// Resilience configuration
pub mod resilience;
/// Search pipeline configuration
pub mod search;
/// Validation scoring configuration
pub mod validation;

pub use app::AppConfig;
pub use cache::CacheConfig;
pub use logging::LoggingConfig;
pub use resilience::ResilienceConfig;
pub use search::SearchConfig;
pub use validation::ValidationConfig;
