//! Error types for the Qubic crate
//!
//! This module contains all error types that can be returned by Qubic operations.

use config::ConfigError;
use query_core::QueryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QubicError {
    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Query not found: {0}")]
    QueryNotFound(String),

    #[error("Query already registered: {0}")]
    QueryAlreadyRegistered(String),
}
