//! Query builder utilities
//!
//! This module turns accumulated fragments into SQL text, one clause at a time.
//! Optional clauses build to an empty string when they have nothing to say.

use crate::query_builder::ordering::SortOrder;
use crate::query_builder::pagination::Pagination;

pub struct SqlGenerator;

impl SqlGenerator {
    /// Build SELECT clause from columns
    pub fn build_select_clause(columns: &[String]) -> String {
        format!("SELECT {}", columns.join(", "))
    }

    /// Build FROM clause from tables
    pub fn build_from_clause(tables: &[String]) -> String {
        format!("FROM {}", tables.join(", "))
    }

    /// Build JOIN clauses, one space between consecutive joins
    pub fn build_join_clause(joins: &[String]) -> String {
        joins.join(" ")
    }

    /// Build WHERE clause; every predicate is ANDed
    pub fn build_where_clause(predicates: &[String]) -> String {
        if predicates.is_empty() {
            return "".to_string();
        }

        format!("WHERE {}", predicates.join(" AND "))
    }

    /// Build GROUP BY clause
    pub fn build_group_by_clause(columns: &[String]) -> String {
        if columns.is_empty() {
            return "".to_string();
        }

        format!("GROUP BY {}", columns.join(", "))
    }

    /// Build ORDER BY clause
    ///
    /// The direction keyword follows the last column of each list only:
    /// `ORDER BY a, b ASC, c DESC`.
    pub fn build_order_clause(asc: &[String], desc: &[String]) -> String {
        let order_items: Vec<String> = [(asc, SortOrder::Asc), (desc, SortOrder::Desc)]
            .iter()
            .filter(|(columns, _)| !columns.is_empty())
            .map(|(columns, order)| format!("{} {}", columns.join(", "), order.to_sql()))
            .collect();

        if order_items.is_empty() {
            return "".to_string();
        }

        format!("ORDER BY {}", order_items.join(", "))
    }

    /// Build LIMIT/OFFSET clause
    pub fn build_limit_clause(pagination: &Pagination) -> String {
        pagination.to_sql()
    }

    /// Join clause strings with single spaces, skipping empty clauses
    pub fn assemble(clauses: &[String]) -> String {
        clauses
            .iter()
            .filter(|clause| !clause.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_select_and_from() {
        assert_eq!(
            SqlGenerator::build_select_clause(&strings(&["id", "name"])),
            "SELECT id, name"
        );
        assert_eq!(SqlGenerator::build_from_clause(&strings(&["users"])), "FROM users");
    }

    #[test]
    fn test_empty_select_keeps_keyword() {
        assert_eq!(SqlGenerator::build_select_clause(&[]), "SELECT ");
    }

    #[test]
    fn test_where_joins_with_and() {
        assert_eq!(SqlGenerator::build_where_clause(&[]), "");
        assert_eq!(
            SqlGenerator::build_where_clause(&strings(&["a = 1", "b IN (2, 3)"])),
            "WHERE a = 1 AND b IN (2, 3)"
        );
    }

    #[test]
    fn test_order_clause_variants() {
        assert_eq!(SqlGenerator::build_order_clause(&[], &[]), "");
        assert_eq!(
            SqlGenerator::build_order_clause(&strings(&["a", "b"]), &[]),
            "ORDER BY a, b ASC"
        );
        assert_eq!(
            SqlGenerator::build_order_clause(&[], &strings(&["c"])),
            "ORDER BY c DESC"
        );
        assert_eq!(
            SqlGenerator::build_order_clause(&strings(&["a", "b"]), &strings(&["c", "d"])),
            "ORDER BY a, b ASC, c, d DESC"
        );
    }

    #[test]
    fn test_group_by_and_joins() {
        assert_eq!(SqlGenerator::build_group_by_clause(&[]), "");
        assert_eq!(
            SqlGenerator::build_group_by_clause(&strings(&["dept", "role"])),
            "GROUP BY dept, role"
        );
        assert_eq!(
            SqlGenerator::build_join_clause(&strings(&["LEFT JOIN a ON x", "INNER JOIN b ON y"])),
            "LEFT JOIN a ON x INNER JOIN b ON y"
        );
    }
}
