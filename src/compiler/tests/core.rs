//! Shared compilation behavior, exercised through the Desktop dialect.

use pretty_assertions::assert_eq;

use crate::ast::*;
use crate::compiler::{Dialect, ToSql};
use crate::error::SqlError;

#[test]
fn test_select_star() {
    let result = Query::from("users").to_sql().unwrap();
    assert_eq!(result.sql, "SELECT * FROM [users]");
    assert_eq!(result.raw_sql, "SELECT * FROM [users]");
    assert!(result.bindings.is_empty());
}

#[test]
fn test_columns_and_alias() {
    let result = Query::from("users")
        .column("id")
        .column_as("email", "mail")
        .to_sql()
        .unwrap();
    assert_eq!(result.sql, "SELECT [id], [email] AS [mail] FROM [users]");
}

#[test]
fn test_filters_chain_under_and() {
    let result = Query::from("users")
        .filter(eq("active", true))
        .filter(gt("age", 21))
        .to_sql_with_dialect(Dialect::Desktop)
        .unwrap();
    assert_eq!(
        result.raw_sql,
        "SELECT * FROM [users] WHERE [active] = @p1 AND [age] > @p2"
    );
    assert_eq!(
        result.sql,
        "SELECT * FROM [users] WHERE [active] = ? AND [age] > ?"
    );
    assert_eq!(result.bindings[0].value, Value::Bool(true));
    assert_eq!(result.bindings[1].value, Value::Int(21));
}

#[test]
fn test_nested_or_group_is_parenthesized() {
    let result = Query::from("t")
        .filter(all([eq("a", 1), any([eq("b", 2), eq("c", 3)])]))
        .to_sql_with_dialect(Dialect::Desktop)
        .unwrap();
    assert_eq!(
        result.raw_sql,
        "SELECT * FROM [t] WHERE [a] = @p1 AND ([b] = @p2 OR [c] = @p3)"
    );
}

#[test]
fn test_not_compiles_to_inverse_operator() {
    let negated = Query::from("t")
        .filter(not(eq("id", 5)))
        .to_sql_with_dialect(Dialect::Desktop)
        .unwrap();
    let direct = Query::from("t")
        .filter(ne("id", 5))
        .to_sql_with_dialect(Dialect::Desktop)
        .unwrap();
    assert_eq!(negated.raw_sql, "SELECT * FROM [t] WHERE [id] <> @p1");
    assert_eq!(negated.raw_sql, direct.raw_sql);
}

#[test]
fn test_not_inverts_ordering_operators() {
    let result = Query::from("t")
        .filter(not(gte("age", 18)))
        .to_sql_with_dialect(Dialect::Desktop)
        .unwrap();
    assert_eq!(result.raw_sql, "SELECT * FROM [t] WHERE [age] < @p1");
}

#[test]
fn test_not_group_falls_back_to_wrapper() {
    let result = Query::from("t")
        .filter(not(any([eq("a", 1), eq("b", 2)])))
        .to_sql_with_dialect(Dialect::Desktop)
        .unwrap();
    assert_eq!(
        result.raw_sql,
        "SELECT * FROM [t] WHERE NOT ([a] = @p1 OR [b] = @p2)"
    );
}

#[test]
fn test_between() {
    let result = Query::from("t")
        .filter(between("age", 18, 30))
        .to_sql_with_dialect(Dialect::Desktop)
        .unwrap();
    assert_eq!(
        result.raw_sql,
        "SELECT * FROM [t] WHERE [age] BETWEEN @p1 AND @p2"
    );
    assert_eq!(result.bindings[0].value, Value::Int(18));
    assert_eq!(result.bindings[1].value, Value::Int(30));
}

#[test]
fn test_not_between() {
    let result = Query::from("t")
        .filter(not(between("age", 18, 30)))
        .to_sql_with_dialect(Dialect::Desktop)
        .unwrap();
    assert_eq!(
        result.raw_sql,
        "SELECT * FROM [t] WHERE [age] NOT BETWEEN @p1 AND @p2"
    );
}

#[test]
fn test_in_list() {
    let result = Query::from("t")
        .filter(is_in("id", [1, 2, 3]))
        .to_sql_with_dialect(Dialect::Desktop)
        .unwrap();
    assert_eq!(
        result.raw_sql,
        "SELECT * FROM [t] WHERE [id] IN (@p1, @p2, @p3)"
    );
    assert_eq!(result.bindings.len(), 3);
}

#[test]
fn test_empty_in_list_is_rejected() {
    let err = Query::from("t")
        .filter(is_in("id", Vec::<i64>::new()))
        .to_sql_with_dialect(Dialect::Desktop)
        .unwrap_err();
    assert!(matches!(err, SqlError::InvalidValue(_)));
}

#[test]
fn test_flag_conditions() {
    let result = Query::from("t")
        .filter(flag("deleted", Some(false)))
        .to_sql_with_dialect(Dialect::Desktop)
        .unwrap();
    assert_eq!(result.raw_sql, "SELECT * FROM [t] WHERE [deleted] = FALSE");

    let result = Query::from("t")
        .filter(flag("deleted", None))
        .to_sql_with_dialect(Dialect::Desktop)
        .unwrap();
    assert_eq!(result.raw_sql, "SELECT * FROM [t] WHERE [deleted] IS NULL");

    let result = Query::from("t")
        .filter(not(flag("deleted", Some(true))))
        .to_sql_with_dialect(Dialect::Desktop)
        .unwrap();
    assert_eq!(result.raw_sql, "SELECT * FROM [t] WHERE [deleted] <> TRUE");
}

#[test]
fn test_null_tests() {
    let result = Query::from("t")
        .filter(is_null("closed_at"))
        .filter(is_not_null("opened_at"))
        .to_sql_with_dialect(Dialect::Desktop)
        .unwrap();
    assert_eq!(
        result.raw_sql,
        "SELECT * FROM [t] WHERE [closed_at] IS NULL AND [opened_at] IS NOT NULL"
    );
    assert!(result.bindings.is_empty());
}

#[test]
fn test_order_by() {
    let result = Query::from("users")
        .order_asc("name")
        .order_desc("id")
        .to_sql()
        .unwrap();
    assert_eq!(
        result.sql,
        "SELECT * FROM [users] ORDER BY [name] ASC, [id] DESC"
    );
}

#[test]
fn test_distinct() {
    let result = Query::from("users").distinct().to_sql().unwrap();
    assert_eq!(result.sql, "SELECT DISTINCT * FROM [users]");
}

#[test]
fn test_subquery_source() {
    let inner = Query::from("users").column("id");
    let result = Query::from_subquery(inner, "u").to_sql().unwrap();
    assert_eq!(result.sql, "SELECT * FROM (SELECT [id] FROM [users]) AS [u]");
}

#[test]
fn test_subquery_bindings_keep_textual_order() {
    let inner = Query::from("users").column("id").filter(gt("age", 18));
    let result = Query::from_subquery(inner, "u")
        .filter(eq("id", 7))
        .limit(5)
        .to_sql_with_dialect(Dialect::Desktop)
        .unwrap();
    assert_eq!(
        result.raw_sql,
        "SELECT TOP @p1 * FROM (SELECT [id] FROM [users] WHERE [age] > @p2) AS [u] WHERE [id] = @p3"
    );
    assert_eq!(result.bindings[0].value, Value::Int(5));
    assert_eq!(result.bindings[1].value, Value::Int(18));
    assert_eq!(result.bindings[2].value, Value::Int(7));
}

#[test]
fn test_offset_is_rejected() {
    let err = Query::from("t")
        .limit(10)
        .offset(5)
        .to_sql_with_dialect(Dialect::Desktop)
        .unwrap_err();
    assert!(matches!(
        err,
        SqlError::UnsupportedLimitOffset {
            limit: Some(10),
            offset: 5
        }
    ));

    let err = Query::from("t").offset(5).to_sql().unwrap_err();
    assert!(matches!(err, SqlError::UnsupportedLimitOffset { .. }));
}

#[test]
fn test_binding_count_matches_placeholders() {
    let result = Query::from("orders")
        .column("id")
        .filter(all([
            eq("status", 2),
            any([gt("total", 100.0), flag("rush", Some(true))]),
        ]))
        .filter(between("placed", 10, 20))
        .limit(25)
        .to_sql_with_dialect(Dialect::Desktop)
        .unwrap();
    assert_eq!(result.sql.matches('?').count(), result.bindings.len());
    assert_eq!(result.bindings[0].value, Value::Int(25));
}

#[test]
fn test_compile_does_not_mutate_the_query() {
    let query = Query::from("users")
        .column("id")
        .filter(like("name", "A*"))
        .limit(3);
    let before = query.clone();
    query.to_sql_with_dialect(Dialect::Desktop).unwrap();
    query.to_sql_with_dialect(Dialect::Spreadsheet).unwrap();
    assert_eq!(query, before);
}
