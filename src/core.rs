//! Core Qubic functionality
//!
//! This module contains the named-query registry, which turns configured
//! query definitions into ready `QueryBuilder`s.

use config::{
    JoinDefinition, LimitDefinition, OrderDefinition, PredicateDefinition, QubicConfig,
    QueryDefinition,
};
use query_core::{
    Fragments, LikePosition, QueryBuilder, QueryError, ScalarValue, SortOrder, debug_log,
    trace_log,
};
use std::collections::BTreeMap;

use crate::errors::QubicError;

/// Registry of named query definitions
#[derive(Debug, Clone, Default)]
pub struct Qubic {
    queries: BTreeMap<String, QueryDefinition>,
}

impl Qubic {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            queries: BTreeMap::new(),
        }
    }

    /// Create a registry holding every query of a loaded configuration
    pub fn from_config(config: QubicConfig) -> Self {
        debug_log!("registering {} configured queries", config.queries.len());
        Self {
            queries: config.queries,
        }
    }

    /// Load configuration (QUBIC_CONFIG or ./qubic.toml) into a new registry
    pub fn load() -> Result<Self, QubicError> {
        let config = QubicConfig::load()?;
        Ok(Self::from_config(config))
    }

    /// Register a query definition with a given name
    pub fn register_query(
        &mut self,
        name: String,
        definition: QueryDefinition,
    ) -> Result<(), QubicError> {
        if self.queries.contains_key(&name) {
            return Err(QubicError::QueryAlreadyRegistered(name));
        }

        self.queries.insert(name, definition);
        Ok(())
    }

    /// Remove a query definition by name
    pub fn unregister_query(&mut self, name: &str) -> Result<QueryDefinition, QubicError> {
        self.queries
            .remove(name)
            .ok_or_else(|| QubicError::QueryNotFound(name.to_string()))
    }

    /// Get a registered query definition by name
    pub fn definition(&self, name: &str) -> Result<&QueryDefinition, QubicError> {
        self.queries
            .get(name)
            .ok_or_else(|| QubicError::QueryNotFound(name.to_string()))
    }

    /// List all registered query names
    pub fn list_queries(&self) -> Vec<&String> {
        self.queries.keys().collect()
    }

    /// Build a fresh `QueryBuilder` from a registered definition
    ///
    /// The returned builder can be extended further before rendering.
    pub fn builder(&self, name: &str) -> Result<QueryBuilder, QubicError> {
        let definition = self.definition(name)?;
        match build_query(definition) {
            Ok(builder) => Ok(builder),
            Err(err) => {
                debug_log!("query '{}' rejected: {}", name, err);
                Err(err.into())
            }
        }
    }

    /// Render a registered query straight to SQL
    pub fn render(&self, name: &str) -> Result<String, QubicError> {
        Ok(self.builder(name)?.render())
    }
}

/// Apply a query definition to a new builder.
///
/// Column lists that are neither a string nor an array of strings fail with
/// `InvalidArgumentType`. Unknown join kinds, sort directions and like
/// positions are skipped, as are values with no scalar kind.
pub fn build_query(definition: &QueryDefinition) -> Result<QueryBuilder, QueryError> {
    let mut builder = QueryBuilder::new();

    if let Some(select) = &definition.select {
        builder = builder.select(Fragments::try_from(select)?);
    }
    if let Some(from) = &definition.from {
        builder = builder.from(Fragments::try_from(from)?);
    }
    for join in &definition.joins {
        builder = apply_join(builder, join);
    }
    for predicate in &definition.predicates {
        builder = apply_predicate(builder, predicate)?;
    }
    if let Some(group_by) = &definition.group_by {
        builder = builder.group_by(Fragments::try_from(group_by)?);
    }
    for order in &definition.order_by {
        builder = apply_order(builder, order)?;
    }
    if let Some(limit) = &definition.limit {
        builder = apply_limit(builder, limit);
    }

    Ok(builder)
}

fn apply_join(builder: QueryBuilder, join: &JoinDefinition) -> QueryBuilder {
    builder.join_named(&join.table, &join.on, &join.kind)
}

fn apply_predicate(
    builder: QueryBuilder,
    predicate: &PredicateDefinition,
) -> Result<QueryBuilder, QueryError> {
    let builder = match predicate {
        PredicateDefinition::Where {
            column,
            value,
            escape,
        } => builder.where_json(column, value, *escape),
        PredicateDefinition::WhereIn { column, values } => {
            builder.where_in(column, Fragments::try_from(values)?)
        }
        PredicateDefinition::Like {
            column,
            value,
            position,
        } => match LikePosition::parse(position) {
            Some(position) => builder.like_json(column, value, position),
            None => {
                trace_log!("like on '{}' ignored: unrecognized position '{}'", column, position);
                builder
            }
        },
        PredicateDefinition::Raw { fragment } => builder.where_raw(fragment),
    };

    Ok(builder)
}

fn apply_order(builder: QueryBuilder, order: &OrderDefinition) -> Result<QueryBuilder, QueryError> {
    let columns = Fragments::try_from(&order.columns)?;
    match SortOrder::parse(&order.direction) {
        Some(direction) => Ok(builder.order_by(columns, direction)),
        None => {
            trace_log!("order by ignored: unrecognized direction '{}'", order.direction);
            Ok(builder)
        }
    }
}

fn apply_limit(builder: QueryBuilder, limit: &LimitDefinition) -> QueryBuilder {
    match (
        ScalarValue::from_json(&limit.count),
        ScalarValue::from_json(&limit.offset),
    ) {
        (Some(count), Some(offset)) => builder.limit(count, offset),
        _ => {
            trace_log!("limit ignored: unrecognized count or offset");
            builder
        }
    }
}
