use serde::{Deserialize, Serialize};

use crate::ast::{Operator, Value};

/// A node in the filter tree.
///
/// Leaf variants reference exactly one column and carry one value (two for
/// `Between`); `And`/`Or`/`Not` combine subtrees. The compiler walks this
/// tree recursively and never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    /// Plain comparison: `column <op> value`.
    Basic {
        column: String,
        op: Operator,
        value: Value,
    },
    /// String comparison or pattern match, optionally case-insensitive.
    Str {
        column: String,
        op: Operator,
        pattern: String,
        #[serde(default)]
        case_insensitive: bool,
    },
    /// Range check: `column BETWEEN low AND high`.
    Between {
        column: String,
        low: Value,
        high: Value,
    },
    /// Boolean flag check. `expected: None` tests for NULL.
    Flag {
        column: String,
        expected: Option<bool>,
    },
    /// All members must hold.
    And(Vec<Condition>),
    /// At least one member must hold.
    Or(Vec<Condition>),
    /// Negation of the inner condition.
    Not(Box<Condition>),
}

impl Condition {
    /// Combine this condition with another under AND.
    ///
    /// Flattens when `self` is already an And group, so chained calls build
    /// one group instead of a nested ladder.
    pub fn and(self, other: Condition) -> Condition {
        match self {
            Condition::And(mut items) => {
                items.push(other);
                Condition::And(items)
            }
            first => Condition::And(vec![first, other]),
        }
    }

    /// Combine this condition with another under OR.
    pub fn or(self, other: Condition) -> Condition {
        match self {
            Condition::Or(mut items) => {
                items.push(other);
                Condition::Or(items)
            }
            first => Condition::Or(vec![first, other]),
        }
    }

    /// Negate this condition.
    pub fn negate(self) -> Condition {
        match self {
            // Double negation cancels out.
            Condition::Not(inner) => *inner,
            other => Condition::Not(Box::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::builders::{eq, ne};

    #[test]
    fn test_and_flattens() {
        let cond = eq("a", 1).and(eq("b", 2)).and(eq("c", 3));
        match cond {
            Condition::And(items) => assert_eq!(items.len(), 3),
            other => panic!("expected And group, got {:?}", other),
        }
    }

    #[test]
    fn test_double_negation_cancels() {
        let cond = ne("a", 1).negate().negate();
        assert_eq!(cond, ne("a", 1));
    }
}
