//! Application Layer - Graph-Validated Search
//!
//! This crate contains the application layer of the validated search
//! pipeline: the services that turn raw vector-similarity results into
//! confidence-scored, hallucination-filtered responses.
//!
//! ## Architecture
//!
//! The application layer:
//! - Implements the validation domain services (structural validation,
//!   confidence scoring, orchestration)
//! - Implements the top-level validated search use case (facade)
//! - Defines the service port consumed by outer layers
//! - Depends on `gvs-domain` for value objects and store ports, and on
//!   `gvs-infrastructure` for the cache and resilience primitives
//!
//! ## Pipeline
//!
//! 1. Semantic search against the vector store (with candidate over-fetch)
//! 2. Structural validation of each candidate against the graph store
//! 3. Confidence scoring and combined-score ranking
//! 4. Filtering, truncation, and summary statistics

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
