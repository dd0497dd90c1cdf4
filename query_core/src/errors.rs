use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A clause input was neither a string nor a sequence of strings
    #[error("Invalid argument type: expected a string or an array of strings, got {0}")]
    InvalidArgumentType(String),
}
