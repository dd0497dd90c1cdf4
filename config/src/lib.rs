//! # Configuration Management for Qubic
//!
//! This crate describes named queries in TOML so they can be assembled by the
//! query builder without hard-coding clause fragments.
//!
//! ## TOML File Configuration
//! ```toml
//! [queries.adult_users]
//! select = ["id", "name"]
//! from = "users"
//! group_by = "dept"
//!
//! [[queries.adult_users.joins]]
//! table = "depts"
//! on = "depts.id = users.dept_id"
//! kind = "left"
//!
//! [[queries.adult_users.where]]
//! kind = "where"
//! column = "age >"
//! value = 18
//!
//! [[queries.adult_users.where]]
//! kind = "like"
//! column = "name"
//! value = "Ad"
//! position = "after"
//!
//! [[queries.adult_users.order_by]]
//! columns = ["id"]
//! direction = "asc"
//!
//! [queries.adult_users.limit]
//! count = 10
//! offset = 0
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::QubicConfig;
//!
//! // Load from the path in QUBIC_CONFIG, or ./qubic.toml
//! let config = QubicConfig::load()?;
//!
//! // Or load from custom path
//! let config = QubicConfig::from_file("config/reports.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./qubic.toml";
const CONFIG_PATH_ENV: &str = "QUBIC_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QubicConfig {
    #[serde(default)]
    pub queries: BTreeMap<String, QueryDefinition>,
}

/// One named SELECT statement
///
/// Column and table lists stay raw JSON so that a single string and a list of
/// strings are both accepted, and anything else is reported by the builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryDefinition {
    #[serde(default)]
    pub select: Option<Value>,
    #[serde(default)]
    pub from: Option<Value>,
    #[serde(default)]
    pub joins: Vec<JoinDefinition>,
    #[serde(default, rename = "where")]
    pub predicates: Vec<PredicateDefinition>,
    #[serde(default)]
    pub group_by: Option<Value>,
    #[serde(default)]
    pub order_by: Vec<OrderDefinition>,
    #[serde(default)]
    pub limit: Option<LimitDefinition>,
}

/// JOIN entry; `kind` is `inner`, `left` or `right`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinDefinition {
    pub table: String,
    pub on: String,
    pub kind: String,
}

/// WHERE entry, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PredicateDefinition {
    Where {
        column: String,
        value: Value,
        #[serde(default)]
        escape: bool,
    },
    WhereIn {
        column: String,
        values: Value,
    },
    Like {
        column: String,
        value: Value,
        position: String,
    },
    Raw {
        fragment: String,
    },
}

/// ORDER BY entry; `direction` is `asc` or `desc`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDefinition {
    pub columns: Value,
    pub direction: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitDefinition {
    pub count: Value,
    pub offset: Value,
}

impl QubicConfig {
    /// Load configuration from TOML file specified in .env or defaults
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv() {
            // a missing .env file is fine
            if !err.not_found() {
                return Err(err.into());
            }
        }

        match env::var(CONFIG_PATH_ENV) {
            Ok(config_path) => Self::from_file(&config_path),
            Err(env::VarError::NotPresent) => Self::load_default(),
            Err(err) => Err(err.into()),
        }
    }

    fn load_default() -> Result<Self, ConfigError> {
        if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            Err(ConfigError::Invalid(format!(
                "Config path must be specified as {} or in {} file",
                CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH
            )))
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        for (name, query) in &self.queries {
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "Query name cannot be empty".to_string(),
                ));
            }
            query.validate(name)?;
        }

        Ok(())
    }
}

impl QueryDefinition {
    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if self.from.is_none() {
            return Err(ConfigError::Invalid(format!(
                "Query '{}' must define a from clause",
                name
            )));
        }
        for join in &self.joins {
            if join.table.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "Query '{}' has a join without a table",
                    name
                )));
            }
        }
        for predicate in &self.predicates {
            if matches!(predicate, PredicateDefinition::Raw { fragment } if fragment.trim().is_empty())
            {
                return Err(ConfigError::Invalid(format!(
                    "Query '{}' has an empty raw predicate",
                    name
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SAMPLE: &str = r#"
        [queries.adult_users]
        select = ["id", "name"]
        from = "users"
        group_by = "dept"

        [[queries.adult_users.joins]]
        table = "depts"
        on = "depts.id = users.dept_id"
        kind = "left"

        [[queries.adult_users.where]]
        kind = "where"
        column = "age >"
        value = 18

        [[queries.adult_users.where]]
        kind = "where_in"
        column = "status"
        values = ["'a'", "'b'"]

        [[queries.adult_users.where]]
        kind = "raw"
        fragment = "(x = 1 OR y = 2)"

        [[queries.adult_users.order_by]]
        columns = "id"
        direction = "asc"

        [queries.adult_users.limit]
        count = 10
        offset = "0"
    "#;

    #[test]
    fn test_parse_full_definition() {
        let config = QubicConfig::from_toml_str(SAMPLE).unwrap();
        let query = &config.queries["adult_users"];

        assert_eq!(query.select, Some(json!(["id", "name"])));
        assert_eq!(query.from, Some(json!("users")));
        assert_eq!(query.group_by, Some(json!("dept")));
        assert_eq!(query.joins.len(), 1);
        assert_eq!(query.joins[0].kind, "left");
        assert_eq!(query.predicates.len(), 3);
        assert_eq!(
            query.predicates[0],
            PredicateDefinition::Where {
                column: "age >".to_string(),
                value: json!(18),
                escape: false,
            }
        );
        assert_eq!(query.order_by[0].columns, json!("id"));
        assert_eq!(
            query.limit,
            Some(LimitDefinition {
                count: json!(10),
                offset: json!("0"),
            })
        );
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = QubicConfig::from_toml_str("").unwrap();
        assert!(config.queries.is_empty());
    }

    #[test]
    fn test_missing_from_is_rejected() {
        let err = QubicConfig::from_toml_str(
            r#"
            [queries.broken]
            select = "id"
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("broken")));
    }

    #[test]
    fn test_empty_raw_predicate_is_rejected() {
        let err = QubicConfig::from_toml_str(
            r#"
            [queries.q]
            from = "t"

            [[queries.q.where]]
            kind = "raw"
            fragment = "  "
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_unknown_predicate_kind_is_a_parse_error() {
        let err = QubicConfig::from_toml_str(
            r#"
            [queries.q]
            from = "t"

            [[queries.q.where]]
            kind = "between"
            column = "age"
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_from_file_reads_toml() {
        let path = std::env::temp_dir().join(format!("qubic_config_{}.toml", std::process::id()));
        std::fs::write(&path, SAMPLE).unwrap();

        let config = QubicConfig::from_file(&path).unwrap();
        assert!(config.queries.contains_key("adult_users"));

        std::fs::remove_file(&path).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_load_rejects_non_unicode_config_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        std::env::set_var(CONFIG_PATH_ENV, OsStr::from_bytes(b"/tmp/qubic\xff.toml"));
        let result = QubicConfig::load();
        std::env::remove_var(CONFIG_PATH_ENV);

        assert!(matches!(
            result,
            Err(ConfigError::Env(env::VarError::NotUnicode(_)))
        ));
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let err = QubicConfig::from_file("/nonexistent/qubic.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
