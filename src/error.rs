//! Error types for deskql.

use thiserror::Error;

use crate::ast::Operator;

#[derive(Debug, Error)]
pub enum SqlError {
    /// The condition tree uses an operator the target dialect cannot express.
    #[error("Operator '{op}' has no dialect equivalent for column '{column}'")]
    UnsupportedOperator { op: Operator, column: String },

    /// A condition carries a value of the wrong shape (e.g. IN without a list).
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// An And/Or group with no members cannot be rendered.
    #[error("Empty condition group cannot be compiled")]
    EmptyConditionGroup,

    /// Neither dialect can express OFFSET; refusing beats returning the wrong rows.
    #[error("limit={limit:?} with offset={offset} is not supported by this dialect")]
    UnsupportedLimitOffset { limit: Option<u32>, offset: u32 },

    /// A referenced table or worksheet does not exist in the source file.
    #[error("Table or sheet '{name}' not found in '{source_path}'")]
    TableNotFound {
        name: String,
        source_path: String,
        /// Original driver message, preserved as cause context.
        driver_message: String,
    },

    /// Driver error that matched no known shape; propagated verbatim.
    #[error("Driver error: {0}")]
    Driver(String),
}

impl SqlError {
    /// Create an unsupported-operator error.
    pub fn unsupported(op: Operator, column: impl Into<String>) -> Self {
        Self::UnsupportedOperator {
            op,
            column: column.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidValue(message.into())
    }
}

/// Result type alias for deskql operations.
pub type SqlResult<T> = Result<T, SqlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SqlError::unsupported(Operator::In, "tags");
        assert_eq!(
            err.to_string(),
            "Operator 'IN' has no dialect equivalent for column 'tags'"
        );

        let err = SqlError::UnsupportedLimitOffset {
            limit: Some(10),
            offset: 5,
        };
        assert_eq!(
            err.to_string(),
            "limit=Some(10) with offset=5 is not supported by this dialect"
        );
    }
}
