//! Predicate fragments for the WHERE clause.
//!
//! Every predicate is rendered to its final text as soon as it is added; the
//! builder only ever stores strings.

use crate::query_builder::fragments::Fragments;
use crate::query_builder::value::ScalarValue;

/// Wildcard placement for LIKE patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikePosition {
    /// `'%value'`
    Before,
    /// `'value%'`
    After,
    /// `'%value%'`
    Both,
}

impl LikePosition {
    /// Parse `"before"`, `"after"` or `"both"`
    pub fn parse(position: &str) -> Option<Self> {
        match position {
            "before" => Some(LikePosition::Before),
            "after" => Some(LikePosition::After),
            "both" => Some(LikePosition::Both),
            _ => None,
        }
    }

    pub fn wrap(&self, value: &str) -> String {
        match self {
            LikePosition::Before => format!("'%{}'", value),
            LikePosition::After => format!("'{}%'", value),
            LikePosition::Both => format!("'%{}%'", value),
        }
    }
}

/// Single WHERE predicate before rendering
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `<column_and_operator> <value>`, value optionally single-quoted
    Compare {
        column_and_operator: String,
        value: ScalarValue,
        escape: bool,
    },
    /// `<column> IN (v1, v2, ...)`
    In { column: String, values: Fragments },
    /// `<column> LIKE '<pattern>'`
    Like {
        column: String,
        value: ScalarValue,
        position: LikePosition,
    },
    /// Caller-composed predicate, kept verbatim
    Raw(String),
}

impl Predicate {
    pub fn compare(column_and_operator: &str, value: ScalarValue, escape: bool) -> Self {
        Self::Compare {
            column_and_operator: column_and_operator.to_string(),
            value,
            escape,
        }
    }

    pub fn in_values(column: &str, values: Fragments) -> Self {
        Self::In {
            column: column.to_string(),
            values,
        }
    }

    pub fn like(column: &str, value: ScalarValue, position: LikePosition) -> Self {
        Self::Like {
            column: column.to_string(),
            value,
            position,
        }
    }

    pub fn raw(fragment: &str) -> Self {
        Self::Raw(fragment.to_string())
    }

    pub fn to_sql(&self) -> String {
        match self {
            Predicate::Compare {
                column_and_operator,
                value,
                escape,
            } => {
                let text = value.to_sql_text();
                // booleans are never quoted
                if *escape && !value.is_bool() {
                    format!("{} '{}'", column_and_operator, text)
                } else {
                    format!("{} {}", column_and_operator, text)
                }
            }
            Predicate::In { column, values } => {
                format!("{} IN ({})", column, values.as_slice().join(", "))
            }
            Predicate::Like {
                column,
                value,
                position,
            } => format!("{} LIKE {}", column, position.wrap(&value.to_pattern_text())),
            Predicate::Raw(fragment) => fragment.clone(),
        }
    }
}
