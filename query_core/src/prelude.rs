//! Convenience re-exports for common query-core usage

// Error types
pub use crate::errors::QueryError;

// Query building
pub use crate::query_builder::{
    Fragments, JoinKind, LikePosition, QueryBuilder, ScalarValue, SortOrder,
};

// Dynamic inputs are expressed as JSON values
pub use serde_json::{json, Value};
