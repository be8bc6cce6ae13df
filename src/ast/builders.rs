//! Condition builders for filter trees.

use crate::ast::{Condition, Operator, Value};

/// Helper to create a basic condition.
fn make_condition(column: &str, op: Operator, value: Value) -> Condition {
    Condition::Basic {
        column: column.to_string(),
        op,
        value,
    }
}

/// Create an equality condition (column = value)
pub fn eq(column: &str, value: impl Into<Value>) -> Condition {
    make_condition(column, Operator::Eq, value.into())
}

pub fn ne(column: &str, value: impl Into<Value>) -> Condition {
    make_condition(column, Operator::Ne, value.into())
}

pub fn gt(column: &str, value: impl Into<Value>) -> Condition {
    make_condition(column, Operator::Gt, value.into())
}

pub fn gte(column: &str, value: impl Into<Value>) -> Condition {
    make_condition(column, Operator::Gte, value.into())
}

pub fn lt(column: &str, value: impl Into<Value>) -> Condition {
    make_condition(column, Operator::Lt, value.into())
}

pub fn lte(column: &str, value: impl Into<Value>) -> Condition {
    make_condition(column, Operator::Lte, value.into())
}

/// Create a column-to-column equality, for JOIN predicates.
pub fn eq_col(column: &str, other: &str) -> Condition {
    make_condition(column, Operator::Eq, Value::Column(other.to_string()))
}

pub fn is_in<V: Into<Value>>(column: &str, values: impl IntoIterator<Item = V>) -> Condition {
    let vals: Vec<Value> = values.into_iter().map(|v| v.into()).collect();
    make_condition(column, Operator::In, Value::Array(vals))
}

pub fn not_in<V: Into<Value>>(column: &str, values: impl IntoIterator<Item = V>) -> Condition {
    let vals: Vec<Value> = values.into_iter().map(|v| v.into()).collect();
    make_condition(column, Operator::NotIn, Value::Array(vals))
}

pub fn is_null(column: &str) -> Condition {
    make_condition(column, Operator::IsNull, Value::Null)
}

pub fn is_not_null(column: &str) -> Condition {
    make_condition(column, Operator::IsNotNull, Value::Null)
}

/// Case-sensitive pattern match. The pattern uses the legacy wildcard
/// convention (`*`, `?`, `#`, `[!...]`); dialects translate it as needed.
pub fn like(column: &str, pattern: &str) -> Condition {
    Condition::Str {
        column: column.to_string(),
        op: Operator::Like,
        pattern: pattern.to_string(),
        case_insensitive: false,
    }
}

/// Case-insensitive pattern match.
pub fn like_ci(column: &str, pattern: &str) -> Condition {
    Condition::Str {
        column: column.to_string(),
        op: Operator::Like,
        pattern: pattern.to_string(),
        case_insensitive: true,
    }
}

pub fn not_like(column: &str, pattern: &str) -> Condition {
    Condition::Str {
        column: column.to_string(),
        op: Operator::NotLike,
        pattern: pattern.to_string(),
        case_insensitive: false,
    }
}

pub fn between(column: &str, low: impl Into<Value>, high: impl Into<Value>) -> Condition {
    Condition::Between {
        column: column.to_string(),
        low: low.into(),
        high: high.into(),
    }
}

/// Boolean flag check; `expected: None` tests for NULL.
pub fn flag(column: &str, expected: Option<bool>) -> Condition {
    Condition::Flag {
        column: column.to_string(),
        expected,
    }
}

/// Group conditions under AND.
pub fn all(conditions: impl IntoIterator<Item = Condition>) -> Condition {
    Condition::And(conditions.into_iter().collect())
}

/// Group conditions under OR.
pub fn any(conditions: impl IntoIterator<Item = Condition>) -> Condition {
    Condition::Or(conditions.into_iter().collect())
}

/// Negate a condition.
pub fn not(condition: Condition) -> Condition {
    condition.negate()
}
