//! Query model and fluent builder methods.

use serde::{Deserialize, Serialize};

use crate::ast::{Condition, Join, JoinKind, SortOrder};

/// A projected column, optionally aliased.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
}

/// What the query selects from: a table, or a nested query with an alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Source {
    Table(String),
    Subquery(Box<Query>, String),
}

/// One ORDER BY term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBy {
    pub column: String,
    pub order: SortOrder,
}

/// Dialect-neutral description of a SELECT query.
///
/// Build one with the fluent methods below, then hand it to a dialect
/// compiler. Compilation borrows the query; the tree is never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Projected columns; empty means `*`.
    pub columns: Vec<Column>,
    pub source: Source,
    pub joins: Vec<Join>,
    pub filter: Option<Condition>,
    pub order: Vec<OrderBy>,
    pub distinct: bool,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl Query {
    /// Start a query against a table.
    pub fn from(table: impl AsRef<str>) -> Self {
        Self::with_source(Source::Table(table.as_ref().to_string()))
    }

    /// Start a query against a nested query.
    pub fn from_subquery(inner: Query, alias: impl AsRef<str>) -> Self {
        Self::with_source(Source::Subquery(
            Box::new(inner),
            alias.as_ref().to_string(),
        ))
    }

    fn with_source(source: Source) -> Self {
        Self {
            columns: Vec::new(),
            source,
            joins: Vec::new(),
            filter: None,
            order: Vec::new(),
            distinct: false,
            limit: None,
            offset: None,
        }
    }

    pub fn column(mut self, name: impl AsRef<str>) -> Self {
        self.columns.push(Column {
            name: name.as_ref().to_string(),
            alias: None,
        });
        self
    }

    pub fn column_as(mut self, name: impl AsRef<str>, alias: impl AsRef<str>) -> Self {
        self.columns.push(Column {
            name: name.as_ref().to_string(),
            alias: Some(alias.as_ref().to_string()),
        });
        self
    }

    pub fn columns<I, S>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.columns.extend(cols.into_iter().map(|c| Column {
            name: c.as_ref().to_string(),
            alias: None,
        }));
        self
    }

    /// Add a filter condition. Successive calls are combined under AND.
    pub fn filter(mut self, condition: Condition) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(existing) => existing.and(condition),
            None => condition,
        });
        self
    }

    pub fn join(mut self, kind: JoinKind, table: impl AsRef<str>, on: Vec<Condition>) -> Self {
        self.joins.push(Join {
            table: table.as_ref().to_string(),
            kind,
            on,
        });
        self
    }

    pub fn inner_join(self, table: impl AsRef<str>, on: Vec<Condition>) -> Self {
        self.join(JoinKind::Inner, table, on)
    }

    pub fn left_join(self, table: impl AsRef<str>, on: Vec<Condition>) -> Self {
        self.join(JoinKind::Left, table, on)
    }

    pub fn order_by(mut self, column: impl AsRef<str>, order: SortOrder) -> Self {
        self.order.push(OrderBy {
            column: column.as_ref().to_string(),
            order,
        });
        self
    }

    pub fn order_asc(self, column: impl AsRef<str>) -> Self {
        self.order_by(column, SortOrder::Asc)
    }

    pub fn order_desc(self, column: impl AsRef<str>) -> Self {
        self.order_by(column, SortOrder::Desc)
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn limit(mut self, n: u32) -> Self {
        self.limit = Some(n);
        self
    }

    /// Record an offset request. Neither supported dialect can honor one;
    /// compilation fails fast rather than returning the wrong rows.
    pub fn offset(mut self, n: u32) -> Self {
        self.offset = Some(n);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::builders::{eq, gt};

    #[test]
    fn test_filter_chains_under_and() {
        let q = Query::from("users").filter(eq("a", 1)).filter(gt("b", 2));
        match q.filter {
            Some(Condition::And(items)) => assert_eq!(items.len(), 2),
            other => panic!("expected And group, got {:?}", other),
        }
    }
}
