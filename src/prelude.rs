//! Convenience re-exports for common Qubic usage
//!
//! # Example
//!
//! ```rust
//! use qubic::prelude::*;
//!
//! let sql = QueryBuilder::new().select("id").from("users").render();
//! assert_eq!(sql, "SELECT id FROM users");
//! ```

// Core Qubic components
pub use crate::core::{Qubic, build_query};
pub use crate::errors::QubicError;

// Re-export centralized config
pub use config::{
    ConfigError, JoinDefinition, LimitDefinition, OrderDefinition, PredicateDefinition,
    QubicConfig, QueryDefinition,
};

// Query building
pub use query_core::prelude::*;
