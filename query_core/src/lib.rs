//! Query Core - SELECT statement assembly for Qubic
//!
//! This crate provides the fluent `QueryBuilder` that accumulates raw clause
//! fragments and renders them into one SQL `SELECT` string. Nothing here talks
//! to a database.

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod prelude;
pub mod query_builder;

pub use errors::QueryError;
pub use query_builder::{
    Fragments, JoinKind, LikePosition, QueryBuilder, ScalarValue, SortOrder,
};
