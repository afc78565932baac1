//! Graph existence-check statements
//!
//! The structural validator only ever issues these fixed statements against
//! the graph store, with parameters carrying the identifiers under test.
//! Centralizing them keeps production adapters and in-memory fakes agreed
//! on the dialect.

/// Does a repository with the given `$name` exist?
pub const REPOSITORY_EXISTS: &str =
    "MATCH (r:Repository {name: $name}) RETURN count(r) > 0 AS exists";

/// Does a class with the given `$name` (simple or fully qualified) exist?
pub const CLASS_EXISTS: &str =
    "MATCH (c:Class) WHERE c.name = $name OR c.full_name = $name RETURN count(c) > 0 AS exists";

/// Does method `$method_name` exist on class `$class_name`?
pub const METHOD_EXISTS_IN_CLASS: &str = "MATCH (c:Class)-[:HAS_METHOD]->(m:Method {name: $method_name}) WHERE c.name = $class_name OR c.full_name = $class_name RETURN count(m) > 0 AS exists";

/// Does method `$method_name` exist on any class?
pub const METHOD_EXISTS: &str =
    "MATCH (:Class)-[:HAS_METHOD]->(m:Method {name: $method_name}) RETURN count(m) > 0 AS exists";

/// Does a standalone function with the given `$name` exist?
pub const FUNCTION_EXISTS: &str =
    "MATCH (f:Function {name: $name}) RETURN count(f) > 0 AS exists";

/// Cheap liveness probe used by health checks
pub const HEALTH_PING: &str = "RETURN 1 AS ok";

/// Name of the boolean field returned by every existence statement
pub const EXISTS_FIELD: &str = "exists";
