//! Scalar values accepted by predicates and LIMIT/OFFSET.
//!
//! Every kind has exactly one textual form. Signed and unsigned integers of
//! any width render as plain decimal, booleans as `0` / `1`.

use serde_json::Value;
use std::fmt;

/// A value the builder knows how to stringify
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarValue {
    Str(String),
    Bool(bool),
    Int(i64),
    UInt(u64),
}

impl ScalarValue {
    /// Map a JSON value onto a scalar kind.
    ///
    /// Floats, null, arrays and objects are not recognized and yield `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Str(s.clone())),
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_u64().map(Self::UInt)),
            _ => None,
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    /// Textual form used inside WHERE and LIMIT/OFFSET
    pub fn to_sql_text(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Bool(false) => "0".to_string(),
            Self::Bool(true) => "1".to_string(),
            Self::Int(i) => i.to_string(),
            Self::UInt(u) => u.to_string(),
        }
    }

    /// Textual form used inside a LIKE pattern. Booleans have none.
    pub fn to_pattern_text(&self) -> String {
        match self {
            Self::Bool(_) => String::new(),
            other => other.to_sql_text(),
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql_text())
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for ScalarValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ScalarValue {
                fn from(value: $t) -> Self {
                    Self::Int(value as i64)
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ScalarValue {
                fn from(value: $t) -> Self {
                    Self::UInt(value as u64)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);
