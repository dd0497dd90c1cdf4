//! Single-or-many string inputs for clause accumulators.

use crate::errors::QueryError;
use serde_json::Value;

/// Ordered list of raw clause fragments (column names, table names, IN values)
///
/// A single string converts into a one-element list. Fragments are never
/// validated or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragments(Vec<String>);

impl Fragments {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for Fragments {
    fn from(value: &str) -> Self {
        Self(vec![value.to_string()])
    }
}

impl From<String> for Fragments {
    fn from(value: String) -> Self {
        Self(vec![value])
    }
}

impl From<&String> for Fragments {
    fn from(value: &String) -> Self {
        Self(vec![value.clone()])
    }
}

impl From<Vec<String>> for Fragments {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl From<Vec<&str>> for Fragments {
    fn from(values: Vec<&str>) -> Self {
        Self(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Fragments {
    fn from(values: &[&str]) -> Self {
        Self(values.iter().map(|v| v.to_string()).collect())
    }
}

impl From<&[String]> for Fragments {
    fn from(values: &[String]) -> Self {
        Self(values.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for Fragments {
    fn from(values: [&str; N]) -> Self {
        Self(values.iter().map(|v| v.to_string()).collect())
    }
}

impl TryFrom<&Value> for Fragments {
    type Error = QueryError;

    /// Accepts a JSON string or an array made only of strings.
    /// Nothing is converted unless every element is a string.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(Self(vec![s.clone()])),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(QueryError::InvalidArgumentType(format!(
                        "array element {}",
                        json_kind(other)
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self),
            other => Err(QueryError::InvalidArgumentType(
                json_kind(other).to_string(),
            )),
        }
    }
}

impl TryFrom<Value> for Fragments {
    type Error = QueryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

impl IntoIterator for Fragments {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
