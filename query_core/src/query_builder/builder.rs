//! Query builder utilities
//!
//! This module provides the fluent `SELECT` builder.
//!
//! Two inputs are dropped without an error instead of being rejected: a JSON
//! value with no scalar kind passed to [`QueryBuilder::where_json`], and an
//! unknown join kind passed to [`QueryBuilder::join_named`]. Callers feeding
//! untrusted kinds should check [`JoinKind::parse`] / [`ScalarValue::from_json`]
//! first.

use crate::query_builder::filter::{LikePosition, Predicate};
use crate::query_builder::fragments::Fragments;
use crate::query_builder::join::JoinKind;
use crate::query_builder::ordering::SortOrder;
use crate::query_builder::pagination::Pagination;
use crate::query_builder::sql_generation::SqlGenerator;
use crate::query_builder::value::ScalarValue;
use serde_json::Value;
use std::fmt;

/// Query builder accumulating raw `SELECT` clause fragments
///
/// Every list is append-only. Rendering never mutates the builder, so the same
/// state can be rendered any number of times.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryBuilder {
    pub(crate) select_columns: Vec<String>,
    pub(crate) from_tables: Vec<String>,
    pub(crate) where_fragments: Vec<String>,
    pub(crate) join_fragments: Vec<String>,
    pub(crate) group_by_columns: Vec<String>,
    pub(crate) order_by_asc: Vec<String>,
    pub(crate) order_by_desc: Vec<String>,
    pub(crate) pagination: Pagination,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self {
            select_columns: Vec::new(),
            from_tables: Vec::new(),
            where_fragments: Vec::new(),
            join_fragments: Vec::new(),
            group_by_columns: Vec::new(),
            order_by_asc: Vec::new(),
            order_by_desc: Vec::new(),
            pagination: Pagination::new(),
        }
    }

    /// Add one or many columns to the SELECT list
    pub fn select(mut self, columns: impl Into<Fragments>) -> Self {
        let columns: Fragments = columns.into();
        self.select_columns.extend(columns);
        self
    }

    /// Add one or many tables to the FROM list
    pub fn from(mut self, tables: impl Into<Fragments>) -> Self {
        let tables: Fragments = tables.into();
        self.from_tables.extend(tables);
        self
    }

    /// Add one or many GROUP BY columns
    pub fn group_by(mut self, columns: impl Into<Fragments>) -> Self {
        let columns: Fragments = columns.into();
        self.group_by_columns.extend(columns);
        self
    }

    /// Add one or many ORDER BY columns to the list selected by `order`
    pub fn order_by(mut self, columns: impl Into<Fragments>, order: SortOrder) -> Self {
        let columns: Fragments = columns.into();
        match order {
            SortOrder::Asc => self.order_by_asc.extend(columns),
            SortOrder::Desc => self.order_by_desc.extend(columns),
        }
        self
    }

    /// Add `<column_and_operator> <value>`, single-quoting the value when
    /// `escape` is set. Booleans render as `0`/`1` and are never quoted.
    pub fn where_(
        self,
        column_and_operator: &str,
        value: impl Into<ScalarValue>,
        escape: bool,
    ) -> Self {
        self.predicate(Predicate::compare(column_and_operator, value.into(), escape))
    }

    /// Same as [`QueryBuilder::where_`] for a dynamic value.
    ///
    /// Values without a scalar kind (floats, null, arrays, objects) add nothing.
    pub fn where_json(self, column_and_operator: &str, value: &Value, escape: bool) -> Self {
        match ScalarValue::from_json(value) {
            Some(scalar) => self.where_(column_and_operator, scalar, escape),
            None => {
                trace_log!(
                    "where '{}' ignored: unrecognized value {}",
                    column_and_operator,
                    value
                );
                self
            }
        }
    }

    /// Add `<column> IN (v1, v2, ...)`
    pub fn where_in(self, column: &str, values: impl Into<Fragments>) -> Self {
        self.predicate(Predicate::in_values(column, values.into()))
    }

    /// Add a caller-composed predicate verbatim, e.g. an OR group
    pub fn where_raw(self, fragment: &str) -> Self {
        self.predicate(Predicate::raw(fragment))
    }

    /// Add `<column> LIKE '<pattern>'` with wildcards placed by `position`.
    ///
    /// Booleans have no pattern text and produce an empty pattern.
    pub fn like(self, column: &str, value: impl Into<ScalarValue>, position: LikePosition) -> Self {
        self.predicate(Predicate::like(column, value.into(), position))
    }

    /// Same as [`QueryBuilder::like`] for a dynamic value; unrecognized values
    /// produce an empty pattern.
    pub fn like_json(self, column: &str, value: &Value, position: LikePosition) -> Self {
        let scalar =
            ScalarValue::from_json(value).unwrap_or_else(|| ScalarValue::Str(String::new()));
        self.like(column, scalar, position)
    }

    fn predicate(mut self, predicate: Predicate) -> Self {
        let fragment = predicate.to_sql();
        trace_log!("where fragment added: {}", fragment);
        self.where_fragments.push(fragment);
        self
    }

    /// Add `<KIND> JOIN <table> ON <condition>`
    pub fn join(mut self, table: &str, condition: &str, kind: JoinKind) -> Self {
        self.join_fragments.push(kind.fragment(table, condition));
        self
    }

    /// Add a join whose kind is given as `"inner"`, `"left"` or `"right"`.
    ///
    /// Any other kind adds nothing.
    pub fn join_named(self, table: &str, condition: &str, kind: &str) -> Self {
        match JoinKind::parse(kind) {
            Some(kind) => self.join(table, condition, kind),
            None => {
                trace_log!("join on '{}' ignored: unrecognized kind '{}'", table, kind);
                self
            }
        }
    }

    /// Set LIMIT and OFFSET together
    pub fn limit(mut self, count: impl Into<ScalarValue>, offset: impl Into<ScalarValue>) -> Self {
        self.pagination.set(count.into(), offset.into());
        self
    }

    pub fn select_columns(&self) -> &[String] {
        &self.select_columns
    }

    pub fn from_tables(&self) -> &[String] {
        &self.from_tables
    }

    pub fn where_fragments(&self) -> &[String] {
        &self.where_fragments
    }

    pub fn join_fragments(&self) -> &[String] {
        &self.join_fragments
    }

    pub fn group_by_columns(&self) -> &[String] {
        &self.group_by_columns
    }

    pub fn order_by_asc(&self) -> &[String] {
        &self.order_by_asc
    }

    pub fn order_by_desc(&self) -> &[String] {
        &self.order_by_desc
    }

    pub fn limit_value(&self) -> Option<&str> {
        self.pagination.limit.as_deref()
    }

    pub fn offset_value(&self) -> Option<&str> {
        self.pagination.offset.as_deref()
    }

    /// Render the complete SELECT statement. No trailing semicolon is added.
    pub fn render(&self) -> String {
        let sql = SqlGenerator::assemble(&[
            SqlGenerator::build_select_clause(&self.select_columns),
            SqlGenerator::build_from_clause(&self.from_tables),
            SqlGenerator::build_join_clause(&self.join_fragments),
            SqlGenerator::build_where_clause(&self.where_fragments),
            SqlGenerator::build_group_by_clause(&self.group_by_columns),
            SqlGenerator::build_order_clause(&self.order_by_asc, &self.order_by_desc),
            SqlGenerator::build_limit_clause(&self.pagination),
        ]);

        debug_log!("rendered query: {}", sql);
        sql
    }
}

impl fmt::Display for QueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
