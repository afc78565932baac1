//! Stable cache key derivation
//!
//! Cache keys are derived from an operation name plus its arguments. Equal
//! inputs must always hash identically, so JSON objects are serialized with
//! sorted keys before hashing — `serde_json` map order is not guaranteed to
//! be stable across construction sites.

use serde_json::Value;
use sha2::{Digest, Sha256};

/// Derive a stable cache key from an operation name and its arguments
///
/// # Example
///
/// ```rust
/// use gvs_infrastructure::cache::cache_key;
/// use serde_json::json;
///
/// let a = cache_key("validate", &[json!({"x": 1, "y": 2})]);
/// let b = cache_key("validate", &[json!({"y": 2, "x": 1})]);
/// assert_eq!(a, b);
/// ```
pub fn cache_key(operation: &str, args: &[Value]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(operation.as_bytes());
    for arg in args {
        // Unit separator keeps ("ab", "c") distinct from ("a", "bc")
        hasher.update([0x1f]);
        let mut canonical = String::new();
        write_canonical(arg, &mut canonical);
        hasher.update(canonical.as_bytes());
    }
    hex::encode(hasher.finalize())
}

/// Serialize a JSON value with recursively sorted object keys
fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push('{');
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String((*key).clone()).to_string());
                out.push(':');
                write_canonical(&map[*key], out);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}
