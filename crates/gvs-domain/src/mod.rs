//! # Domain Layer
//!
//! Core business types for graph-validated code search: the value objects
//! flowing through the validation pipeline, the error type shared by every
//! layer, and the provider ports that external stores implement.
//!
//! ## Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`constants`] | Scoring thresholds, check weights, metadata keys |
//! | [`error`] | Error enum and `Result` alias |
//! | [`ports`] | Provider port traits (vector store, graph store, embedding) |
//! | [`queries`] | Graph existence-check statements |
//! | [`value_objects`] | Search results, validation outcomes, responses |
//!
//! ## Dependencies
//!
//! This crate depends only on pure Rust libraries for serialization, error
//! derivation, and async trait definitions. It has no knowledge of any
//! concrete store, runtime, or transport.

pub mod constants;
pub mod error;
pub mod ports;
pub mod queries;
pub mod value_objects;

// Re-export commonly used types
pub use error::{Error, Result};
pub use value_objects::{
    CodeType, SearchMetadata, SearchResponse, SearchResult, ValidatedResult, ValidationCheck,
    ValidationOutcome, ValidationSummary,
};
