//! The Desktop dialect (Jet-style database files).
//!
//! Quirks this dialect layers on the shared skeleton:
//! - `LIKE` becomes `ALIKE` and patterns are rewritten from the legacy
//!   wildcard convention to the ANSI one, unless the compiler was built in
//!   legacy mode, in which case both pass through verbatim.
//! - String literals are double-quoted with embedded `"` doubled; the
//!   driver's parser prefers that over single-quote doubling.
//! - Dates render as `#MM/DD/YYYY#` literals.
//! - JOIN ON clauses are always parenthesized; the parser rejects a bare
//!   boolean combination after `ON`.
//! - Case folding is a no-op: the driver has no LCASE/UCASE, and its
//!   pattern matching is case-insensitive already.

use chrono::{NaiveDate, NaiveDateTime};

use crate::compiler::traits::SqlCompiler;
use crate::wildcard;

/// Compiler for the Desktop dialect. Configuration-only; see
/// [`CompileContext`](crate::compiler::CompileContext) for per-call state.
#[derive(Debug, Clone, Copy)]
pub struct DesktopCompiler {
    /// When false, keep the plain LIKE operator and pass wildcard patterns
    /// through verbatim (the driver's legacy wildcard mode).
    pub ansi_wildcards: bool,
}

impl DesktopCompiler {
    pub fn new() -> Self {
        Self {
            ansi_wildcards: true,
        }
    }

    /// A compiler for drivers configured in legacy wildcard mode.
    pub fn legacy() -> Self {
        Self {
            ansi_wildcards: false,
        }
    }
}

impl Default for DesktopCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlCompiler for DesktopCompiler {
    fn quote_string(&self, s: &str) -> String {
        format!("\"{}\"", s.replace('"', "\"\""))
    }

    fn date_literal(&self, date: &NaiveDate) -> String {
        format!("#{}#", date.format("%m/%d/%Y"))
    }

    fn datetime_literal(&self, dt: &NaiveDateTime) -> String {
        format!("#{}#", dt.format("%m/%d/%Y %H:%M:%S"))
    }

    fn fold_case(&self, expr: &str) -> String {
        // No case-folding functions in this dialect; emit the operand
        // unchanged rather than erroring.
        expr.to_string()
    }

    fn like_keyword(&self, negated: bool) -> &'static str {
        match (self.ansi_wildcards, negated) {
            (true, false) => "ALIKE",
            (true, true) => "NOT ALIKE",
            (false, false) => "LIKE",
            (false, true) => "NOT LIKE",
        }
    }

    fn translate_pattern(&self, pattern: &str) -> String {
        if self.ansi_wildcards {
            wildcard::translate_pattern(pattern)
        } else {
            pattern.to_string()
        }
    }

    fn wrap_on_clause(&self, clause: String) -> String {
        format!("({})", clause)
    }
}
