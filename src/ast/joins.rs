use serde::{Deserialize, Serialize};

use crate::ast::{Condition, JoinKind};

/// A join definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Join {
    pub table: String,
    pub kind: JoinKind,
    /// ON-clause conditions, combined with AND. Must not be empty.
    pub on: Vec<Condition>,
}
