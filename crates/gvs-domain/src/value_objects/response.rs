//! Response Envelope Value Objects
//!
//! The JSON-serializable structures returned by the validated search
//! facade. The facade never raises: it always returns a [`SearchResponse`],
//! with `success = false` and an error message when the pipeline failed.

use crate::value_objects::{SearchResult, ValidationOutcome};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Value Object: Search Result With Validation Verdict
///
/// A search result paired with the structural validation outcome for it.
/// Created by the orchestrator, consumed by the facade after filtering and
/// ranking; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidatedResult {
    /// The underlying semantic search result
    #[serde(flatten)]
    pub result: SearchResult,
    /// The structural validation verdict for this result
    pub validation: ValidationOutcome,
}

impl ValidatedResult {
    /// Pair a search result with its validation outcome
    pub fn new(result: SearchResult, validation: ValidationOutcome) -> Self {
        Self { result, validation }
    }
}

/// Value Object: Validation Summary Statistics
///
/// Aggregate statistics over one validated search request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationSummary {
    /// Candidates returned by the semantic search
    pub total_found: usize,
    /// Candidates that cleared the minimum confidence threshold
    pub validated_count: usize,
    /// Results in the final (truncated) response
    pub final_count: usize,
    /// Final results at or above the high-confidence threshold
    pub high_confidence_count: usize,
    /// `validated_count / total_found` (0.0 when nothing was found)
    pub validation_rate: f64,
    /// `high_confidence_count / final_count` (0.0 when the response is empty)
    pub high_confidence_rate: f64,
    /// Whether the graph store was available for this request
    pub graph_available: bool,
}

impl ValidationSummary {
    /// Compute summary statistics from the pipeline counters
    pub fn new(
        total_found: usize,
        validated_count: usize,
        final_count: usize,
        high_confidence_count: usize,
        graph_available: bool,
    ) -> Self {
        let rate = |part: usize, whole: usize| {
            if whole > 0 {
                part as f64 / whole as f64
            } else {
                0.0
            }
        };
        Self {
            total_found,
            validated_count,
            final_count,
            high_confidence_count,
            validation_rate: rate(validated_count, total_found),
            high_confidence_rate: rate(high_confidence_count, final_count),
            graph_available,
        }
    }

    /// Summary for a request that found no candidates at all
    pub fn empty(graph_available: bool) -> Self {
        Self::new(0, 0, 0, 0, graph_available)
    }
}

/// Value Object: Search Execution Metadata
///
/// Operational details of one request, attached to successful responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchMetadata {
    /// Number of results the caller asked for
    pub requested_count: usize,
    /// Candidates fetched from the vector store before filtering
    pub candidates_fetched: usize,
    /// Minimum confidence threshold applied
    pub min_confidence: f64,
    /// Whether validations ran concurrently
    pub parallel_validation: bool,
    /// End-to-end request duration in milliseconds
    pub duration_ms: u64,
    /// When the request completed
    pub timestamp: DateTime<Utc>,
}

/// Value Object: Public Response Envelope
///
/// ## Business Rules
///
/// - `success = true` responses carry `results`, `validation_summary`, and
///   `search_metadata`; results are ordered by descending combined score
/// - `success = false` responses carry `error` and `fallback_available`
///   so callers can distinguish "no results" from "a backing store is down"
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    /// Whether the request pipeline completed
    pub success: bool,
    /// The original query string
    pub query: String,
    /// Ranked, filtered results (success only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<ValidatedResult>>,
    /// Aggregate validation statistics (success only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_summary: Option<ValidationSummary>,
    /// Operational request details (success only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_metadata: Option<SearchMetadata>,
    /// The causing error message (failure only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Whether a degraded, non-validated path exists (failure only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_available: Option<bool>,
}

impl SearchResponse {
    /// Build a successful response
    pub fn success(
        query: String,
        results: Vec<ValidatedResult>,
        validation_summary: ValidationSummary,
        search_metadata: SearchMetadata,
    ) -> Self {
        Self {
            success: true,
            query,
            results: Some(results),
            validation_summary: Some(validation_summary),
            search_metadata: Some(search_metadata),
            error: None,
            fallback_available: None,
        }
    }

    /// Build a failure response naming the causing error
    pub fn failure(query: String, error: String, fallback_available: bool) -> Self {
        Self {
            success: false,
            query,
            results: None,
            validation_summary: None,
            search_metadata: None,
            error: Some(error),
            fallback_available: Some(fallback_available),
        }
    }
}
