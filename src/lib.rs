//! # Qubic
//!
//! A fluent SQL `SELECT` builder. Clause fragments are accumulated through
//! chained calls and rendered into one SQL string; nothing here connects to a
//! database.
//!
//! ## Quick Start
//!
//! ```rust
//! use qubic::prelude::*;
//!
//! let sql = QueryBuilder::new()
//!     .select(vec!["id", "name"])
//!     .from("users")
//!     .where_("age >", 18, false)
//!     .group_by("dept")
//!     .order_by("id", SortOrder::Asc)
//!     .limit(10, 0)
//!     .render();
//!
//! assert_eq!(
//!     sql,
//!     "SELECT id, name FROM users WHERE age > 18 GROUP BY dept ORDER BY id ASC LIMIT 10 OFFSET 0"
//! );
//! ```
//!
//! ## Named queries
//!
//! Queries can also be described in TOML and rendered by name, see
//! [`Qubic`] and the `config` crate.

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::{Qubic, build_query};
pub use errors::QubicError;

// Re-export centralized config
pub use config::{ConfigError, QubicConfig, QueryDefinition};

// Re-export internal crates used in the public API
pub use config;
pub use query_core;
