//! Validation scoring configuration types

use crate::constants::*;
use serde::{Deserialize, Serialize};

/// Confidence thresholds and structural check weights
///
/// The weights express how much each structural check contributes to the
/// confidence score of its code type. They do not need to sum to one; the
/// scorer normalizes by the total weight of the checks that actually ran.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Results below this confidence are filtered out
    pub min_confidence_threshold: f64,

    /// Results at or above this confidence count as high-confidence
    pub high_confidence_threshold: f64,

    /// Validate results concurrently rather than one at a time
    pub parallel_validation: bool,

    /// Weight of the repository-exists check
    pub repository_check_weight: f64,

    /// Weight of the class-exists check
    pub class_check_weight: f64,

    /// Weight of the class structure check
    pub structure_check_weight: f64,

    /// Weight of the method-exists check
    pub method_check_weight: f64,

    /// Weight of the method signature check
    pub signature_check_weight: f64,

    /// Weight of the function-exists check
    pub function_check_weight: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_confidence_threshold: MIN_CONFIDENCE_THRESHOLD,
            high_confidence_threshold: HIGH_CONFIDENCE_THRESHOLD,
            parallel_validation: true,
            repository_check_weight: REPOSITORY_CHECK_WEIGHT,
            class_check_weight: CLASS_CHECK_WEIGHT,
            structure_check_weight: STRUCTURE_CHECK_WEIGHT,
            method_check_weight: METHOD_CHECK_WEIGHT,
            signature_check_weight: SIGNATURE_CHECK_WEIGHT,
            function_check_weight: FUNCTION_CHECK_WEIGHT,
        }
    }
}
