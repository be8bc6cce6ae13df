//! SQL compiler for the deskql query AST.
//!
//! Converts a [`Query`] into executable SQL text plus an ordered
//! parameter-binding list for a chosen dialect.

pub mod conditions;
pub mod context;
pub mod desktop;
pub mod dialect;
pub mod select;
pub mod spreadsheet;
pub mod traits;

#[cfg(test)]
mod tests;

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::ast::Query;
use crate::error::SqlResult;

pub use context::{Binding, CompileContext};
pub use dialect::Dialect;
pub use traits::SqlCompiler;

/// The output of one compile call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledResult {
    /// SQL with positional `?` placeholders, ready for drivers that only
    /// take positional parameters.
    pub sql: String,
    /// SQL as compiled, with named `@pN` placeholders.
    pub raw_sql: String,
    /// Bound values, in placeholder order. The number of `?` markers in
    /// `sql` always equals `bindings.len()`.
    pub bindings: Vec<Binding>,
}

/// Trait for compiling AST nodes to SQL.
pub trait ToSql {
    /// Compile using the default dialect.
    fn to_sql(&self) -> SqlResult<CompiledResult> {
        self.to_sql_with_dialect(Dialect::default())
    }
    /// Compile for a specific dialect.
    fn to_sql_with_dialect(&self, dialect: Dialect) -> SqlResult<CompiledResult>;
}

impl ToSql for Query {
    fn to_sql_with_dialect(&self, dialect: Dialect) -> SqlResult<CompiledResult> {
        let compiler = dialect.compiler();
        let mut ctx = CompileContext::new();
        let raw_sql = select::build_select(self, compiler.as_ref(), &mut ctx)?;
        let sql = to_positional(&raw_sql);

        debug_assert_eq!(
            sql.matches('?').count() - non_placeholder_question_marks(&raw_sql),
            ctx.bindings.len(),
            "placeholder count must match binding count"
        );

        tracing::debug!(
            ?dialect,
            sql = %raw_sql,
            bindings = ctx.bindings.len(),
            "compiled query"
        );

        Ok(CompiledResult {
            sql,
            raw_sql,
            bindings: ctx.bindings,
        })
    }
}

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"@p\d+").expect("invalid built-in placeholder regex"))
}

/// Rewrite named placeholders to positional `?` markers.
///
/// Placeholders are allocated in clause order, so their textual order equals
/// binding order and a straight left-to-right rewrite is positionally
/// correct.
fn to_positional(raw: &str) -> String {
    placeholder_re().replace_all(raw, "?").into_owned()
}

/// Question marks already present in the raw SQL (inside inlined string
/// literals), which are not placeholders.
fn non_placeholder_question_marks(raw: &str) -> usize {
    raw.matches('?').count()
}
