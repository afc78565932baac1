//! Application Use Cases
//!
//! Top-level application services composed from the domain services.

/// Validated code search facade
pub mod validated_search;

pub use validated_search::{ValidatedCodeSearchService, ValidatedCodeSearchServiceBuilder};
