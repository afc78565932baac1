//! Search-Related Value Objects
//!
//! Value objects representing semantic search results and the code-element
//! metadata the structural validator interprets.

use crate::constants::{
    METADATA_KEY_CLASS_NAME, METADATA_KEY_CODE_TYPE, METADATA_KEY_FULL_NAME, METADATA_KEY_METHOD_NAME,
    METADATA_KEY_NAME, METADATA_KEY_REPOSITORY_ID, METADATA_KEY_SOURCE_ID,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Kind of code element a search result refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeType {
    /// A class definition
    Class,
    /// A method on a class
    Method,
    /// A standalone function
    Function,
    /// Anything else (or missing metadata)
    Unknown,
}

impl CodeType {
    /// Parse a metadata value into a code type; anything unrecognized is [`CodeType::Unknown`]
    pub fn parse(value: &str) -> Self {
        match value {
            "class" => Self::Class,
            "method" => Self::Method,
            "function" => Self::Function,
            _ => Self::Unknown,
        }
    }

    /// Stable string form used in metadata and log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Method => "method",
            Self::Function => "function",
            Self::Unknown => "unknown",
        }
    }
}

/// Value Object: Ranked Search Result
///
/// Represents a single result from a semantic vector search. Results carry
/// the matched content, free-form metadata describing the code element, and
/// a similarity score. Immutable once returned by the search gateway.
///
/// ## Business Rules
///
/// - `similarity` lies in `[0.0, 1.0]`, higher is better
/// - `metadata` carries `code_type` plus the identifiers the validator needs
///   (`class_name`, `method_name`/`name`, `full_name`, `repository_id`)
///
/// ## Example
///
/// ```rust
/// use gvs_domain::value_objects::{CodeType, SearchResult};
/// use serde_json::json;
/// use std::collections::HashMap;
///
/// let result = SearchResult {
///     content: "def authenticate(token): ...".to_string(),
///     metadata: HashMap::from([
///         ("code_type".to_string(), json!("method")),
///         ("method_name".to_string(), json!("authenticate")),
///         ("repository_id".to_string(), json!("auth-service")),
///     ]),
///     similarity: 0.92,
/// };
/// assert_eq!(result.code_type(), CodeType::Method);
/// assert_eq!(result.repository_id(), Some("auth-service".to_string()));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    /// The matched code content
    pub content: String,
    /// Free-form metadata describing the matched code element
    pub metadata: HashMap<String, Value>,
    /// Semantic similarity score (0.0 to 1.0, higher is better)
    pub similarity: f64,
}

impl SearchResult {
    /// Read a metadata field as a string, if present and string-typed
    fn metadata_str(&self, key: &str) -> Option<String> {
        self.metadata
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// The kind of code element this result refers to
    pub fn code_type(&self) -> CodeType {
        self.metadata
            .get(METADATA_KEY_CODE_TYPE)
            .and_then(Value::as_str)
            .map(CodeType::parse)
            .unwrap_or(CodeType::Unknown)
    }

    /// Class name, when the result describes a class or a scoped method
    pub fn class_name(&self) -> Option<String> {
        self.metadata_str(METADATA_KEY_CLASS_NAME)
    }

    /// Method name (`method_name`, falling back to `name`)
    pub fn method_name(&self) -> Option<String> {
        self.metadata_str(METADATA_KEY_METHOD_NAME)
            .or_else(|| self.metadata_str(METADATA_KEY_NAME))
    }

    /// Generic element name
    pub fn name(&self) -> Option<String> {
        self.metadata_str(METADATA_KEY_NAME)
    }

    /// Fully qualified name, when present
    pub fn full_name(&self) -> Option<String> {
        self.metadata_str(METADATA_KEY_FULL_NAME)
    }

    /// Repository identifier (`repository_id`, falling back to `source_id`)
    pub fn repository_id(&self) -> Option<String> {
        self.metadata_str(METADATA_KEY_REPOSITORY_ID)
            .or_else(|| self.metadata_str(METADATA_KEY_SOURCE_ID))
    }
}
