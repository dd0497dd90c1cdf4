//! Integration tests for TOML-defined queries
//!
//! Loads query definitions from configuration and checks the SQL the
//! registry renders for them.

use pretty_assertions::assert_eq;
use qubic::prelude::*;

const REPORTS: &str = r#"
[queries.training_overview]
select = ["id", "ttl", "competency"]
from = ["training", "user", "project"]
group_by = ["user.id", "user", "project"]

[[queries.training_overview.joins]]
table = "user"
on = "user.id = training.id"
kind = "left"

[[queries.training_overview.where]]
kind = "like"
column = "person.name"
value = "Ad"
position = "after"

[[queries.training_overview.where]]
kind = "where"
column = "user.role ="
value = "project manager"
escape = true

[[queries.training_overview.where]]
kind = "where_in"
column = "user.id"
values = ["4", "3", "11"]

[[queries.training_overview.where]]
kind = "raw"
fragment = "(hr_contract.end IS NULL OR hr_contract.end >= 54)"

[[queries.training_overview.order_by]]
columns = ["user", "project"]
direction = "asc"

[[queries.training_overview.order_by]]
columns = ["user", "project"]
direction = "desc"

[queries.training_overview.limit]
count = "100"
offset = 15

[queries.active_flags]
select = "id"
from = "flags"

[[queries.active_flags.where]]
kind = "where"
column = "enabled ="
value = true
escape = true

[queries.bad_select]
select = 5
from = "t"
"#;

fn registry() -> Qubic {
    let config = QubicConfig::from_toml_str(REPORTS).expect("valid config");
    Qubic::from_config(config)
}

#[test]
fn test_renders_full_configured_query() {
    let sql = registry().render("training_overview").unwrap();

    assert_eq!(
        sql,
        "SELECT id, ttl, competency FROM training, user, project \
         LEFT JOIN user ON user.id = training.id \
         WHERE person.name LIKE 'Ad%' AND user.role = 'project manager' \
         AND user.id IN (4, 3, 11) AND (hr_contract.end IS NULL OR hr_contract.end >= 54) \
         GROUP BY user.id, user, project \
         ORDER BY user, project ASC, user, project DESC \
         LIMIT 100 OFFSET 15"
    );
}

#[test]
fn test_boolean_values_ignore_escape() {
    let sql = registry().render("active_flags").unwrap();
    assert_eq!(sql, "SELECT id FROM flags WHERE enabled = 1");
}

#[test]
fn test_invalid_select_type_surfaces_as_query_error() {
    let err = registry().render("bad_select").unwrap_err();
    assert!(matches!(
        err,
        QubicError::Query(QueryError::InvalidArgumentType(_))
    ));
}

#[test]
fn test_rendering_is_repeatable() {
    let qubic = registry();
    let first = qubic.render("training_overview").unwrap();
    let second = qubic.render("training_overview").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_listed_queries_are_sorted() {
    let qubic = registry();
    assert_eq!(
        qubic.list_queries(),
        vec!["active_flags", "bad_select", "training_overview"]
    );
}

#[test]
fn test_config_errors_convert() {
    let err: QubicError = QubicConfig::from_toml_str("[queries.q]\nselect = \"id\"\n")
        .unwrap_err()
        .into();
    assert!(matches!(err, QubicError::Config(ConfigError::Invalid(_))));
}
