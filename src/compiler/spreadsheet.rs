//! The Spreadsheet dialect (worksheet sources).
//!
//! Extends the Desktop dialect with two worksheet-driver quirks:
//! - Table references compile to a bracket-wrapped name ending in `$`
//!   (`Sheet1` becomes `[Sheet1$]`), idempotently.
//! - Every literal condition value renders as a single-quoted literal; the
//!   driver takes no typed positional parameters for worksheet sources, so
//!   numbers and booleans are quoted too. The emulated row limit stays a
//!   binding.

use chrono::{NaiveDate, NaiveDateTime};

use crate::ast::Value;
use crate::compiler::context::CompileContext;
use crate::compiler::desktop::DesktopCompiler;
use crate::compiler::traits::SqlCompiler;
use crate::error::{SqlError, SqlResult};

/// Compiler for the Spreadsheet dialect. Wraps a [`DesktopCompiler`] and
/// delegates everything it does not override.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadsheetCompiler {
    desktop: DesktopCompiler,
}

impl SpreadsheetCompiler {
    pub fn new() -> Self {
        Self {
            desktop: DesktopCompiler::new(),
        }
    }

    fn single_quoted(&self, raw: &str) -> String {
        format!("'{}'", raw.replace('\'', "''"))
    }
}

impl SqlCompiler for SpreadsheetCompiler {
    /// Mangle a table reference into sheet syntax: bracket-wrapped, ending
    /// in `$`. Idempotent under repeated application.
    fn wrap_table(&self, name: &str) -> String {
        let wrapped = self.wrap_identifier(name);
        if wrapped.ends_with("$]") {
            return wrapped;
        }
        if name.trim_start_matches('[').ends_with('$') {
            return wrapped;
        }
        // Insert the sheet marker just before the closing bracket.
        format!("{}$]", &wrapped[..wrapped.len() - 1])
    }

    fn quote_string(&self, s: &str) -> String {
        self.single_quoted(s)
    }

    fn bool_literal(&self, value: bool) -> String {
        self.single_quoted(if value { "TRUE" } else { "FALSE" })
    }

    fn date_literal(&self, date: &NaiveDate) -> String {
        self.single_quoted(&date.format("%Y-%m-%d").to_string())
    }

    fn datetime_literal(&self, dt: &NaiveDateTime) -> String {
        self.single_quoted(&dt.format("%Y-%m-%d %H:%M:%S").to_string())
    }

    /// Universal value quoting: every literal becomes a single-quoted
    /// string, whatever its type.
    fn literal(&self, value: &Value) -> SqlResult<String> {
        match value {
            Value::Null => Ok("NULL".to_string()),
            Value::Bool(b) => Ok(self.bool_literal(*b)),
            Value::Int(n) => Ok(self.single_quoted(&n.to_string())),
            Value::Float(n) => Ok(self.single_quoted(&n.to_string())),
            Value::Decimal(d) => Ok(self.single_quoted(&d.to_string())),
            Value::String(s) => Ok(self.quote_string(s)),
            Value::Date(d) => Ok(self.date_literal(d)),
            Value::DateTime(dt) => Ok(self.datetime_literal(dt)),
            Value::Uuid(u) => Ok(self.single_quoted(&u.to_string())),
            Value::Column(c) => Ok(self.wrap_identifier(c)),
            Value::Array(_) => Err(SqlError::invalid(
                "a value list is only valid with IN / NOT IN",
            )),
        }
    }

    /// Values never become placeholders for worksheet sources.
    fn compile_value(&self, value: &Value, _ctx: &mut CompileContext) -> SqlResult<String> {
        self.literal(value)
    }

    // The rest of the dialect is the desktop behavior.

    fn fold_case(&self, expr: &str) -> String {
        self.desktop.fold_case(expr)
    }

    fn like_keyword(&self, negated: bool) -> &'static str {
        self.desktop.like_keyword(negated)
    }

    fn translate_pattern(&self, pattern: &str) -> String {
        self.desktop.translate_pattern(pattern)
    }

    fn wrap_on_clause(&self, clause: String) -> String {
        self.desktop.wrap_on_clause(clause)
    }
}
