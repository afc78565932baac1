//! Validation Domain Services
//!
//! The services implementing the structural validation pipeline:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`scoring`] | Pure confidence and combined-score computation |
//! | [`structural`] | Existence/structure checks against the graph store |
//! | [`orchestrator`] | Batched, cached validation over a result set |

/// Validation orchestration over result batches
pub mod orchestrator;
/// Confidence scoring and ranking
pub mod scoring;
/// Structural validation against the graph store
pub mod structural;

pub use orchestrator::ValidationOrchestrator;
pub use scoring::ConfidenceScorer;
pub use structural::StructuralValidator;
