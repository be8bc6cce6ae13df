//! Condition-tree compilation.
//!
//! The walk threads two pieces of state: the mutable [`CompileContext`]
//! (bindings, inline mode) and a `negated` flag pushed down the recursion.
//! `Not` flips the flag instead of emitting text, so a negated leaf compiles
//! to its direct inverse operator (`=` becomes `<>`, `LIKE` becomes
//! `NOT LIKE`) and only `And`/`Or` groups fall back to a `NOT (...)` wrapper.
//! The drivers choke on redundant `NOT` wrapping around plain comparisons.

use crate::ast::{Condition, Operator, Value};
use crate::compiler::context::CompileContext;
use crate::compiler::traits::SqlCompiler;
use crate::error::{SqlError, SqlResult};

/// Compile one condition node.
pub fn compile_condition(
    cond: &Condition,
    compiler: &dyn SqlCompiler,
    ctx: &mut CompileContext,
    negated: bool,
) -> SqlResult<String> {
    match cond {
        Condition::Basic { column, op, value } => {
            compile_basic(column, *op, value, compiler, ctx, negated)
        }
        Condition::Str {
            column,
            op,
            pattern,
            case_insensitive,
        } => compile_str(column, *op, pattern, *case_insensitive, compiler, ctx, negated),
        Condition::Between { column, low, high } => {
            let col = compiler.wrap_identifier(column);
            let keyword = if negated { "NOT BETWEEN" } else { "BETWEEN" };
            Ok(format!(
                "{} {} {} AND {}",
                col,
                keyword,
                compiler.compile_value(low, ctx)?,
                compiler.compile_value(high, ctx)?
            ))
        }
        Condition::Flag { column, expected } => {
            let col = compiler.wrap_identifier(column);
            match expected {
                // <> rather than a flipped literal: NOT (x = TRUE) must not
                // match rows where the flag is NULL.
                Some(b) => {
                    let op = if negated { "<>" } else { "=" };
                    Ok(format!("{} {} {}", col, op, compiler.bool_literal(*b)))
                }
                None => {
                    let test = if negated { "IS NOT NULL" } else { "IS NULL" };
                    Ok(format!("{} {}", col, test))
                }
            }
        }
        Condition::And(items) => compile_group(items, " AND ", compiler, ctx, negated),
        Condition::Or(items) => compile_group(items, " OR ", compiler, ctx, negated),
        Condition::Not(inner) => compile_condition(inner, compiler, ctx, !negated),
    }
}

/// Compile the members of an And/Or group joined by `connective`.
///
/// The first member is never prefixed by a connective; nested multi-member
/// groups are parenthesized for precedence. A negated group renders its
/// positive form inside a `NOT (...)` wrapper — groups have no direct inverse
/// operator to flip to.
pub fn compile_group(
    items: &[Condition],
    connective: &str,
    compiler: &dyn SqlCompiler,
    ctx: &mut CompileContext,
    negated: bool,
) -> SqlResult<String> {
    if items.is_empty() {
        return Err(SqlError::EmptyConditionGroup);
    }
    if negated {
        let inner = compile_group(items, connective, compiler, ctx, false)?;
        return Ok(format!("NOT ({})", inner));
    }
    let mut parts = Vec::with_capacity(items.len());
    for item in items {
        let rendered = compile_condition(item, compiler, ctx, false)?;
        if is_multi_member_group(item) {
            parts.push(format!("({})", rendered));
        } else {
            parts.push(rendered);
        }
    }
    Ok(parts.join(connective))
}

fn is_multi_member_group(cond: &Condition) -> bool {
    matches!(cond, Condition::And(items) | Condition::Or(items) if items.len() > 1)
}

fn compile_basic(
    column: &str,
    op: Operator,
    value: &Value,
    compiler: &dyn SqlCompiler,
    ctx: &mut CompileContext,
    negated: bool,
) -> SqlResult<String> {
    let op = if negated { op.inverted() } else { op };
    let col = compiler.wrap_identifier(column);

    match op {
        Operator::IsNull => Ok(format!("{} IS NULL", col)),
        Operator::IsNotNull => Ok(format!("{} IS NOT NULL", col)),
        Operator::In | Operator::NotIn => {
            let Value::Array(items) = value else {
                return Err(SqlError::invalid(format!(
                    "IN condition on '{}' requires a value list",
                    column
                )));
            };
            if items.is_empty() {
                return Err(SqlError::invalid(format!(
                    "IN condition on '{}' has an empty value list",
                    column
                )));
            }
            let mut rendered = Vec::with_capacity(items.len());
            for item in items {
                rendered.push(compiler.compile_value(item, ctx)?);
            }
            let keyword = if op == Operator::NotIn { "NOT IN" } else { "IN" };
            Ok(format!("{} {} ({})", col, keyword, rendered.join(", ")))
        }
        Operator::Like | Operator::NotLike => {
            // A Basic node can carry a pattern too; route it through the
            // same rewriting as Str so wildcards never leak untranslated.
            let Value::String(pattern) = value else {
                return Err(SqlError::invalid(format!(
                    "pattern match on '{}' requires a string value",
                    column
                )));
            };
            compile_like(column, pattern, op == Operator::NotLike, false, compiler)
        }
        _ => Ok(format!(
            "{} {} {}",
            col,
            op,
            compiler.compile_value(value, ctx)?
        )),
    }
}

fn compile_str(
    column: &str,
    op: Operator,
    pattern: &str,
    case_insensitive: bool,
    compiler: &dyn SqlCompiler,
    ctx: &mut CompileContext,
    negated: bool,
) -> SqlResult<String> {
    let op = if negated { op.inverted() } else { op };
    match op {
        Operator::Like | Operator::NotLike => compile_like(
            column,
            pattern,
            op == Operator::NotLike,
            case_insensitive,
            compiler,
        ),
        Operator::Eq | Operator::Ne => {
            let mut col = compiler.wrap_identifier(column);
            let mut val = compiler.compile_value(&Value::String(pattern.to_string()), ctx)?;
            if case_insensitive {
                col = compiler.fold_case(&col);
                val = compiler.fold_case(&val);
            }
            Ok(format!("{} {} {}", col, op, val))
        }
        other => Err(SqlError::unsupported(other, column)),
    }
}

/// Render a pattern-match condition with the dialect's operator and wildcard
/// convention. Patterns are always inlined; the drivers mishandle
/// placeholders on the right side of their pattern operators.
fn compile_like(
    column: &str,
    pattern: &str,
    negated: bool,
    case_insensitive: bool,
    compiler: &dyn SqlCompiler,
) -> SqlResult<String> {
    let translated = compiler.translate_pattern(pattern);
    let mut col = compiler.wrap_identifier(column);
    let mut val = compiler.quote_string(&translated);
    if case_insensitive {
        col = compiler.fold_case(&col);
        val = compiler.fold_case(&val);
    }
    Ok(format!("{} {} {}", col, compiler.like_keyword(negated), val))
}
