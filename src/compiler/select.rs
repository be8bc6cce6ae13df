//! SELECT compilation.

use crate::ast::{Join, Query, Source, Value};
use crate::compiler::conditions::{compile_condition, compile_group};
use crate::compiler::context::CompileContext;
use crate::compiler::traits::SqlCompiler;
use crate::error::{SqlError, SqlResult};

/// Compile a query to raw SQL with named placeholders.
///
/// Clauses are compiled in textual order so placeholder allocation order
/// matches placeholder position, which the positional rewrite depends on.
pub fn build_select(
    query: &Query,
    compiler: &dyn SqlCompiler,
    ctx: &mut CompileContext,
) -> SqlResult<String> {
    let offset = query.offset.unwrap_or(0);
    if offset > 0 {
        // No dialect here can express OFFSET; emitting SQL anyway would
        // silently return the wrong window of rows.
        return Err(SqlError::UnsupportedLimitOffset {
            limit: query.limit,
            offset,
        });
    }

    let mut sql = if query.distinct {
        String::from("SELECT DISTINCT ")
    } else {
        String::from("SELECT ")
    };

    let mut column_list = compile_columns(query, compiler);

    // Row-limit emulation: with no native limit clause, rewrite the column
    // list to a TOP prefix. The limit is allocated before any other binding,
    // so it is always the first positional parameter.
    let native_limit = compiler.compile_limit(query);
    if let Some(limit) = query.limit {
        if limit > 0 && native_limit.is_none() {
            let placeholder = ctx.bind(Value::Int(i64::from(limit)));
            column_list = format!("TOP {} {}", placeholder, column_list);
        }
    }
    sql.push_str(&column_list);

    sql.push_str(" FROM ");
    sql.push_str(&compile_source(&query.source, compiler, ctx)?);

    for join in &query.joins {
        sql.push_str(&compile_join(join, compiler, ctx)?);
    }

    if let Some(filter) = &query.filter {
        sql.push_str(" WHERE ");
        sql.push_str(&compile_condition(filter, compiler, ctx, false)?);
    }

    if !query.order.is_empty() {
        let terms: Vec<String> = query
            .order
            .iter()
            .map(|o| {
                format!(
                    "{} {}",
                    compiler.wrap_identifier(&o.column),
                    o.order.keyword()
                )
            })
            .collect();
        sql.push_str(" ORDER BY ");
        sql.push_str(&terms.join(", "));
    }

    if let Some(clause) = native_limit {
        sql.push_str(&clause);
    }

    Ok(sql)
}

fn compile_columns(query: &Query, compiler: &dyn SqlCompiler) -> String {
    if query.columns.is_empty() {
        return "*".to_string();
    }
    let cols: Vec<String> = query
        .columns
        .iter()
        .map(|c| {
            let name = compiler.wrap_identifier(&c.name);
            match &c.alias {
                Some(alias) => format!("{} AS {}", name, compiler.wrap_identifier(alias)),
                None => name,
            }
        })
        .collect();
    cols.join(", ")
}

fn compile_source(
    source: &Source,
    compiler: &dyn SqlCompiler,
    ctx: &mut CompileContext,
) -> SqlResult<String> {
    match source {
        Source::Table(name) => Ok(compiler.wrap_table(name)),
        Source::Subquery(inner, alias) => {
            let inner_sql = build_select(inner, compiler, ctx)?;
            Ok(format!(
                "({}) AS {}",
                inner_sql,
                compiler.wrap_identifier(alias)
            ))
        }
    }
}

fn compile_join(
    join: &Join,
    compiler: &dyn SqlCompiler,
    ctx: &mut CompileContext,
) -> SqlResult<String> {
    if join.on.is_empty() {
        return Err(SqlError::EmptyConditionGroup);
    }
    // ON clauses render values inline; the drivers reject placeholders
    // inside join predicates.
    let was_inline = ctx.inline_values;
    ctx.inline_values = true;
    let on = compile_group(&join.on, " AND ", compiler, ctx, false);
    ctx.inline_values = was_inline;

    let clause = compiler.wrap_on_clause(on?);
    Ok(format!(
        " {} JOIN {} ON {}",
        join.kind.keyword(),
        compiler.wrap_table(&join.table),
        clause
    ))
}
