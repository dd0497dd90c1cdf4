//! LIMIT/OFFSET state.

use crate::query_builder::value::ScalarValue;

/// Pagination configuration
///
/// Limit and offset are always set together; an unset pagination renders nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl Pagination {
    pub fn new() -> Self {
        Self {
            limit: None,
            offset: None,
        }
    }

    pub fn set(&mut self, limit: ScalarValue, offset: ScalarValue) {
        self.limit = Some(limit.to_sql_text());
        self.offset = Some(offset.to_sql_text());
    }

    /// A limit counts as set only when it is present and non-empty
    pub fn is_set(&self) -> bool {
        self.limit.as_deref().is_some_and(|l| !l.is_empty())
    }

    pub fn to_sql(&self) -> String {
        if !self.is_set() {
            return String::new();
        }

        format!(
            "LIMIT {} OFFSET {}",
            self.limit.as_deref().unwrap_or_default(),
            self.offset.as_deref().unwrap_or_default()
        )
    }
}
