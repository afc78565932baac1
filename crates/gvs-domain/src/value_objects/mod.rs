//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity. Value objects are defined by their attributes
//! and can be compared for equality.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`SearchResult`] | Ranked result from a semantic search operation |
//! | [`CodeType`] | Kind of code element a result refers to |
//! | [`ValidationCheck`] | One weighted structural assertion |
//! | [`ValidationOutcome`] | Aggregate verdict over a checklist |
//! | [`ValidatedResult`] | Search result paired with its validation |
//! | [`SearchResponse`] | Public response envelope of the facade |
//! | [`Embedding`] | Vector representation of text |

/// Semantic embedding value objects
pub mod embedding;
/// Response envelope value objects
pub mod response;
/// Search-related value objects
pub mod search;
/// Validation-related value objects
pub mod validation;

// Re-export commonly used value objects
pub use embedding::Embedding;
pub use response::{SearchMetadata, SearchResponse, ValidatedResult, ValidationSummary};
pub use search::{CodeType, SearchResult};
pub use validation::{ValidationCheck, ValidationOutcome};
