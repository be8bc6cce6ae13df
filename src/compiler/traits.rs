//! The shared compilation skeleton.
//!
//! `SqlCompiler` carries default-method bodies for everything both dialects
//! have in common; each dialect overrides only what differs. Implementations
//! are configuration-only and safe to share across threads — all per-call
//! state lives in [`CompileContext`].

use chrono::{NaiveDate, NaiveDateTime};

use crate::ast::{Query, Value};
use crate::compiler::context::CompileContext;
use crate::error::{SqlError, SqlResult};

/// Trait for dialect-specific SQL compilation.
pub trait SqlCompiler {
    /// Opening identifier delimiter.
    fn open_quote(&self) -> char {
        '['
    }

    /// Closing identifier delimiter.
    fn close_quote(&self) -> char {
        ']'
    }

    /// Wrap an identifier in the dialect's delimiters.
    ///
    /// Idempotent: an already-delimited identifier is returned unchanged,
    /// never double-wrapped. Dotted identifiers are wrapped per part.
    fn wrap_identifier(&self, name: &str) -> String {
        let open = self.open_quote();
        let close = self.close_quote();
        // A fully delimited name (including one with dots inside the
        // delimiters) is returned as-is; only `].`-separated paths are split.
        if name.len() >= 2
            && name.starts_with(open)
            && name.ends_with(close)
            && !name.contains(&format!("{}.", close))
        {
            return name.to_string();
        }
        name.split('.')
            .map(|part| {
                if part.len() >= 2 && part.starts_with(open) && part.ends_with(close) {
                    part.to_string()
                } else {
                    format!("{}{}{}", open, part, close)
                }
            })
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Wrap a table reference. Same as identifier wrapping unless the dialect
    /// mangles table names (worksheet sources do).
    fn wrap_table(&self, name: &str) -> String {
        self.wrap_identifier(name)
    }

    /// Quote a string literal.
    fn quote_string(&self, s: &str) -> String {
        format!("'{}'", s.replace('\'', "''"))
    }

    /// Boolean literal.
    fn bool_literal(&self, value: bool) -> String {
        if value { "TRUE" } else { "FALSE" }.to_string()
    }

    /// Date literal.
    fn date_literal(&self, date: &NaiveDate) -> String {
        format!("'{}'", date.format("%Y-%m-%d"))
    }

    /// Date-and-time literal.
    fn datetime_literal(&self, dt: &NaiveDateTime) -> String {
        format!("'{}'", dt.format("%Y-%m-%d %H:%M:%S"))
    }

    /// Wrap an expression for case-insensitive comparison.
    fn fold_case(&self, expr: &str) -> String {
        format!("LCASE({})", expr)
    }

    /// The pattern-match keyword, positive or negated form.
    fn like_keyword(&self, negated: bool) -> &'static str {
        if negated { "NOT LIKE" } else { "LIKE" }
    }

    /// Rewrite a pattern into the wildcard convention the dialect's
    /// pattern-match operator expects. Default: pass through verbatim.
    fn translate_pattern(&self, pattern: &str) -> String {
        pattern.to_string()
    }

    /// Render a value as an inline literal.
    fn literal(&self, value: &Value) -> SqlResult<String> {
        match value {
            Value::Null => Ok("NULL".to_string()),
            Value::Bool(b) => Ok(self.bool_literal(*b)),
            Value::Int(n) => Ok(n.to_string()),
            Value::Float(n) => Ok(n.to_string()),
            Value::Decimal(d) => Ok(d.to_string()),
            Value::String(s) => Ok(self.quote_string(s)),
            Value::Date(d) => Ok(self.date_literal(d)),
            Value::DateTime(dt) => Ok(self.datetime_literal(dt)),
            Value::Uuid(u) => Ok(self.quote_string(&u.to_string())),
            Value::Column(c) => Ok(self.wrap_identifier(c)),
            Value::Array(_) => Err(SqlError::invalid(
                "a value list is only valid with IN / NOT IN",
            )),
        }
    }

    /// Compile a condition value: inline literal or placeholder.
    ///
    /// Default policy: column references and NULL always render inline;
    /// strings render as quoted literals; other scalars become typed
    /// positional bindings. ON clauses force inline mode via the context.
    fn compile_value(&self, value: &Value, ctx: &mut CompileContext) -> SqlResult<String> {
        if ctx.inline_values {
            return self.literal(value);
        }
        match value {
            Value::Null => Ok("NULL".to_string()),
            Value::Column(c) => Ok(self.wrap_identifier(c)),
            Value::String(s) => Ok(self.quote_string(s)),
            Value::Array(_) => Err(SqlError::invalid(
                "a value list is only valid with IN / NOT IN",
            )),
            other => Ok(ctx.bind(other.clone())),
        }
    }

    /// Native row-limit clause, appended after ORDER BY.
    ///
    /// Returning `None` signals that the dialect has no such clause and the
    /// select builder must emulate the limit with a TOP prefix instead.
    /// Neither desktop dialect has one; the hook exists so the skeleton stays
    /// dialect-neutral.
    fn compile_limit(&self, _query: &Query) -> Option<String> {
        None
    }

    /// Post-process a rendered JOIN ON clause. Default: pass through.
    fn wrap_on_clause(&self, clause: String) -> String {
        clause
    }
}
