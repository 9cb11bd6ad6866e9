//! Mutation translation tests.

use pretty_assertions::assert_eq;

use super::{err, ok, one};
use crate::ast::{
    DeleteStatement, Expr, InsertStatement, OnConflict, PredicateNode, ProjectionEntry,
    SelectStatement, UpdateStatement,
};
use crate::error::TranslateError;
use crate::request::Method;

#[test]
fn test_insert_builds_array_body() {
    let stmt = InsertStatement::into_table("users")
        .columns(["id", "name"])
        .row([crate::ast::Value::Int(1), crate::ast::Value::from("Alice")])
        .row([crate::ast::Value::Int(2), crate::ast::Value::from("Bob")]);
    let result = ok(stmt);
    assert_eq!(result.method, Method::Post);
    assert_eq!(result.path, "/users");
    assert_eq!(
        result.body.as_deref(),
        Some(r#"[{"id":1,"name":"Alice"},{"id":2,"name":"Bob"}]"#)
    );
    assert_eq!(
        result.headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
    assert_eq!(
        result.headers.get("Prefer").map(String::as_str),
        Some("return=representation")
    );
}

#[test]
fn test_single_row_is_still_an_array() {
    let stmt = InsertStatement::into_table("users")
        .columns(["id"])
        .row([1]);
    let result = ok(stmt);
    assert_eq!(result.body.as_deref(), Some(r#"[{"id":1}]"#));
}

#[test]
fn test_positional_column_names() {
    let stmt = InsertStatement::into_table("users").row([
        crate::ast::Value::Int(1),
        crate::ast::Value::from("Alice"),
    ]);
    let result = ok(stmt);
    assert_eq!(
        result.body.as_deref(),
        Some(r#"[{"column1":1,"column2":"Alice"}]"#)
    );
}

#[test]
fn test_row_arity_mismatch_is_rejected() {
    let stmt = InsertStatement::into_table("users")
        .columns(["id", "name"])
        .row([crate::ast::Value::Int(1), crate::ast::Value::from("Alice")])
        .row([1]);
    assert_eq!(
        err(stmt),
        TranslateError::InsertArity {
            row: 2,
            got: 1,
            want: 2
        }
    );
}

#[test]
fn test_insert_without_rows_is_rejected() {
    assert_eq!(
        err(InsertStatement::into_table("users").columns(["id"])),
        TranslateError::EmptyInsert
    );
}

#[test]
fn test_insert_select_is_rejected() {
    let mut stmt = InsertStatement::into_table("users").row([1]);
    stmt.source = Some(Box::new(SelectStatement::from_table("staging")));
    assert_eq!(err(stmt), TranslateError::Subqueries);
}

#[test]
fn test_upsert_merge_duplicates() {
    let stmt = InsertStatement::into_table("users")
        .columns(["id", "name"])
        .row([crate::ast::Value::Int(1), crate::ast::Value::from("Alice")])
        .on_conflict(OnConflict::merge(["id"]));
    let result = ok(stmt);
    assert_eq!(one(&result, "on_conflict"), "id");
    assert_eq!(
        result.headers.get("Prefer").map(String::as_str),
        Some("return=representation,resolution=merge-duplicates")
    );
}

#[test]
fn test_upsert_ignore_duplicates() {
    let stmt = InsertStatement::into_table("events")
        .columns(["id", "org"])
        .row([1, 2])
        .on_conflict(OnConflict::do_nothing(["id", "org"]));
    let result = ok(stmt);
    assert_eq!(one(&result, "on_conflict"), "id,org");
    assert_eq!(
        result.headers.get("Prefer").map(String::as_str),
        Some("return=representation,resolution=ignore-duplicates")
    );
}

#[test]
fn test_insert_returning_builds_select() {
    let stmt = InsertStatement::into_table("users")
        .columns(["name"])
        .row(["Alice"])
        .returning(ProjectionEntry::column("id"));
    let result = ok(stmt);
    assert_eq!(one(&result, "select"), "id");
}

#[test]
fn test_update() {
    let stmt = UpdateStatement::table("users")
        .set("name", "Alice")
        .filter(PredicateNode::eq("id", 1));
    let result = ok(stmt);
    assert_eq!(result.method, Method::Patch);
    assert_eq!(result.path, "/users");
    assert_eq!(result.body.as_deref(), Some(r#"{"name":"Alice"}"#));
    assert_eq!(one(&result, "id"), "eq.1");
    assert_eq!(
        result.headers.get("Prefer").map(String::as_str),
        Some("return=representation")
    );
}

#[test]
fn test_later_set_columns_overwrite_earlier() {
    let stmt = UpdateStatement::table("users")
        .set("a", 1)
        .set("b", 2)
        .set("a", 3)
        .filter(PredicateNode::eq("id", 1));
    let result = ok(stmt);
    assert_eq!(result.body.as_deref(), Some(r#"{"a":3,"b":2}"#));
}

#[test]
fn test_update_without_filter_is_rejected() {
    let stmt = UpdateStatement::table("users").set("name", "x");
    assert_eq!(err(stmt), TranslateError::UnfilteredMutation("UPDATE"));
}

#[test]
fn test_update_without_assignments_is_rejected() {
    let stmt = UpdateStatement::table("users").filter(PredicateNode::eq("id", 1));
    assert_eq!(err(stmt), TranslateError::EmptyUpdate);
}

#[test]
fn test_computed_assignment_is_rejected() {
    let stmt = UpdateStatement::table("users")
        .set_expr(
            "count",
            Expr::Function {
                name: "coalesce".to_string(),
                args: vec![],
            },
        )
        .filter(PredicateNode::eq("id", 1));
    assert_eq!(err(stmt), TranslateError::ComputedAssignment("function call"));
}

#[test]
fn test_update_alias_resolves_in_filter() {
    let mut stmt = UpdateStatement::table("users")
        .set("name", "x")
        .filter(PredicateNode::eq("u.id", 1));
    stmt.alias = Some("u".to_string());
    let result = ok(stmt);
    assert_eq!(one(&result, "id"), "eq.1");
}

#[test]
fn test_delete_without_filter_is_rejected() {
    assert_eq!(
        err(DeleteStatement::from_table("users")),
        TranslateError::UnfilteredMutation("DELETE")
    );
}

#[test]
fn test_delete() {
    let stmt = DeleteStatement::from_table("users").filter(PredicateNode::eq("id", 1));
    let result = ok(stmt);
    assert_eq!(result.method, Method::Delete);
    assert_eq!(result.path, "/users");
    assert_eq!(one(&result, "id"), "eq.1");
    assert_eq!(result.body, None);
    assert!(!result.headers.contains_key("Content-Type"));
    assert_eq!(
        result.headers.get("Prefer").map(String::as_str),
        Some("return=representation")
    );
}

#[test]
fn test_delete_returning() {
    let stmt = DeleteStatement::from_table("users")
        .filter(PredicateNode::eq("id", 1))
        .returning(ProjectionEntry::column("name"));
    let result = ok(stmt);
    assert_eq!(one(&result, "select"), "name");
}
