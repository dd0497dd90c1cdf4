/// Represents the type of SQL JOIN operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    /// INNER JOIN - returns records that have matching values in both tables
    Inner,
    /// LEFT JOIN - returns all records from the left table and matched records from the right table
    Left,
    /// RIGHT JOIN - returns all records from the right table and matched records from the left table
    Right,
}

impl JoinKind {
    /// Parse `"inner"`, `"left"` or `"right"`; anything else is unrecognized
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "inner" => Some(JoinKind::Inner),
            "left" => Some(JoinKind::Left),
            "right" => Some(JoinKind::Right),
            _ => None,
        }
    }

    /// Convert JoinKind to SQL string
    pub fn to_sql(&self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
        }
    }

    /// Full `<KIND> JOIN <table> ON <condition>` fragment
    pub fn fragment(&self, table: &str, condition: &str) -> String {
        format!("{} {} ON {}", self.to_sql(), table, condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_kind_to_sql() {
        assert_eq!(JoinKind::Inner.to_sql(), "INNER JOIN");
        assert_eq!(JoinKind::Left.to_sql(), "LEFT JOIN");
        assert_eq!(JoinKind::Right.to_sql(), "RIGHT JOIN");
    }

    #[test]
    fn test_join_fragment() {
        assert_eq!(
            JoinKind::Left.fragment("user", "user.id = training.id"),
            "LEFT JOIN user ON user.id = training.id"
        );
    }

    #[test]
    fn test_join_kind_parse() {
        assert_eq!(JoinKind::parse("inner"), Some(JoinKind::Inner));
        assert_eq!(JoinKind::parse("left"), Some(JoinKind::Left));
        assert_eq!(JoinKind::parse("right"), Some(JoinKind::Right));
        assert_eq!(JoinKind::parse("full"), None);
        assert_eq!(JoinKind::parse("Inner"), None);
    }
}
