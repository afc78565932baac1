//! Domain layer constants
//!
//! Contains constants that are part of the domain logic and are used by
//! the application layer. Infrastructure-specific constants remain in
//! `gvs_infrastructure::constants`.

// ============================================================================
// CONFIDENCE SCORING CONSTANTS
// ============================================================================

/// Minimum confidence score a result needs to be considered valid
pub const MIN_CONFIDENCE_THRESHOLD: f64 = 0.6;

/// Confidence score at or above which a result counts as high-confidence
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.8;

/// Confidence assigned when no structural checks were performed
pub const NEUTRAL_CONFIDENCE: f64 = 0.5;

/// Weight of semantic similarity in the combined ranking score
pub const SIMILARITY_WEIGHT: f64 = 0.4;

/// Weight of structural confidence in the combined ranking score
///
/// Confidence is weighted higher than similarity because structural
/// validation is the higher-trust signal.
pub const CONFIDENCE_WEIGHT: f64 = 0.6;

// ============================================================================
// VALIDATION CHECK WEIGHT CONSTANTS
// ============================================================================
// The weight splits encode a ranking policy, not a law; they are surfaced
// through ValidationConfig so deployments can tune them.

/// Weight of the repository-existence check
pub const REPOSITORY_CHECK_WEIGHT: f64 = 0.3;

/// Weight of the class-existence check
pub const CLASS_CHECK_WEIGHT: f64 = 0.4;

/// Weight of the class structure-plausibility check
pub const STRUCTURE_CHECK_WEIGHT: f64 = 0.3;

/// Weight of the method-existence check
pub const METHOD_CHECK_WEIGHT: f64 = 0.4;

/// Weight of the method signature-plausibility check
pub const SIGNATURE_CHECK_WEIGHT: f64 = 0.3;

/// Weight of the standalone-function existence check
pub const FUNCTION_CHECK_WEIGHT: f64 = 0.7;

// ============================================================================
// SEARCH DOMAIN CONSTANTS
// ============================================================================

/// Default number of results returned by a validated search
pub const DEFAULT_MATCH_COUNT: usize = 10;

/// Over-fetch multiplier applied before validation filtering
pub const CANDIDATE_OVERFETCH_FACTOR: usize = 2;

/// TTL for cached validation outcomes, in seconds
pub const VALIDATION_CACHE_TTL_SECS: u64 = 3600;

// ============================================================================
// METADATA KEY CONSTANTS
// ============================================================================

/// Code element type metadata key
pub const METADATA_KEY_CODE_TYPE: &str = "code_type";

/// Class name metadata key
pub const METADATA_KEY_CLASS_NAME: &str = "class_name";

/// Method name metadata key
pub const METADATA_KEY_METHOD_NAME: &str = "method_name";

/// Generic element name metadata key
pub const METADATA_KEY_NAME: &str = "name";

/// Fully qualified name metadata key
pub const METADATA_KEY_FULL_NAME: &str = "full_name";

/// Repository identifier metadata key
pub const METADATA_KEY_REPOSITORY_ID: &str = "repository_id";

/// Source identifier metadata key (fallback for repository id)
pub const METADATA_KEY_SOURCE_ID: &str = "source_id";

/// Source filter metadata key used by the vector store
pub const METADATA_KEY_SOURCE: &str = "source";
