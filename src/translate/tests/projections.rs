//! Projection translation tests.

use pretty_assertions::assert_eq;

use super::{err, ok, one};
use crate::ast::{Join, JsonStep, ProjectionEntry, SelectStatement};
use crate::error::TranslateError;

fn authors_books() -> SelectStatement {
    SelectStatement::from_aliased("authors", "a")
        .join(Join::left("books").alias("b").on("b.author_id", "a.id"))
}

#[test]
fn test_simple_columns() {
    let result = ok(SelectStatement::from_table("users").columns(["id", "name"]));
    assert_eq!(one(&result, "select"), "id,name");
}

#[test]
fn test_bare_wildcard_emits_no_parameter() {
    let result = ok(SelectStatement::from_table("users").wildcard());
    assert!(!result.params.contains_key("select"));

    let result = ok(SelectStatement::from_table("users"));
    assert!(result.params.is_empty());
}

#[test]
fn test_column_alias() {
    let result = ok(SelectStatement::from_table("users")
        .target(ProjectionEntry::column("name").with_alias("nick")));
    assert_eq!(one(&result, "select"), "name:nick");
}

#[test]
fn test_cast() {
    let result = ok(SelectStatement::from_table("items")
        .target(ProjectionEntry::cast("price", "numeric")));
    assert_eq!(one(&result, "select"), "price::numeric");
}

#[test]
fn test_cast_with_alias() {
    let result = ok(SelectStatement::from_table("items")
        .target(ProjectionEntry::cast("price", "text").with_alias("amount")));
    assert_eq!(one(&result, "select"), "price::text:amount");
}

#[test]
fn test_json_path() {
    let entry = ProjectionEntry::json_path(
        "data",
        vec![JsonStep::json("settings"), JsonStep::text("theme")],
    )
    .with_alias("theme");
    let result = ok(SelectStatement::from_table("users").target(entry));
    assert_eq!(one(&result, "select"), "data->settings->>theme:theme");
}

#[test]
fn test_count_star() {
    let result = ok(SelectStatement::from_table("users").target(ProjectionEntry::count_star()));
    assert_eq!(one(&result, "select"), "count()");
}

#[test]
fn test_aliased_count_star() {
    let result = ok(SelectStatement::from_table("users")
        .target(ProjectionEntry::count_star().with_alias("total")));
    assert_eq!(one(&result, "select"), "count():total");
}

#[test]
fn test_aggregate_with_column() {
    let result = ok(SelectStatement::from_table("orders")
        .target(ProjectionEntry::aggregate("sum", "amount").with_alias("total")));
    assert_eq!(one(&result, "select"), "amount.sum():total");
}

#[test]
fn test_unsupported_aggregate_is_rejected() {
    let error = err(SelectStatement::from_table("users")
        .target(ProjectionEntry::aggregate("string_agg", "name")));
    assert_eq!(
        error,
        TranslateError::UnsupportedAggregate("string_agg".to_string())
    );
}

#[test]
fn test_aggregate_without_column_is_rejected() {
    let error = err(SelectStatement::from_table("orders").target(ProjectionEntry::Aggregate {
        function: "sum".to_string(),
        column: None,
        alias: None,
    }));
    assert_eq!(error, TranslateError::AggregateNeedsColumn("sum".to_string()));
}

#[test]
fn test_joined_columns_are_grouped() {
    let result = ok(authors_books().column("a.name").column("b.title"));
    assert_eq!(one(&result, "select"), "name,books(title)");
}

#[test]
fn test_multiple_joined_columns_share_one_group() {
    let result = ok(authors_books()
        .column("a.name")
        .column("b.title")
        .column("b.year"));
    assert_eq!(one(&result, "select"), "name,books(title,year)");
}

#[test]
fn test_aggregate_nested_in_embedded_group() {
    let result = ok(authors_books()
        .column("a.name")
        .target(ProjectionEntry::aggregate("count", "b.id").with_alias("book_count")));
    assert_eq!(one(&result, "select"), "name,books(id.count():book_count)");
}

#[test]
fn test_unreferenced_join_still_renders_a_group() {
    let result = ok(authors_books().column("a.name"));
    assert_eq!(one(&result, "select"), "name,books()");
}

#[test]
fn test_wildcard_with_join() {
    let result = ok(authors_books().wildcard());
    assert_eq!(one(&result, "select"), "*,books()");
}

#[test]
fn test_inner_join_marker() {
    let stmt = SelectStatement::from_aliased("authors", "a")
        .join(Join::inner("books").alias("b").on("b.author_id", "a.id"))
        .column("a.name")
        .column("b.title");
    let result = ok(stmt);
    assert_eq!(one(&result, "select"), "name,books!inner(title)");
}

#[test]
fn test_self_join_merges_into_one_group() {
    let stmt = SelectStatement::from_aliased("employees", "e")
        .join(Join::left("employees").alias("m").on("m.id", "e.manager_id"))
        .column("e.name")
        .target(ProjectionEntry::column("m.name").with_alias("manager"));
    let result = ok(stmt);
    assert_eq!(one(&result, "select"), "name,employees(name:manager)");
}

#[test]
fn test_window_function_is_rejected() {
    let error = err(SelectStatement::from_table("users").target(ProjectionEntry::Window {
        function: "row_number".to_string(),
    }));
    assert_eq!(error, TranslateError::WindowFunctions);
}

#[test]
fn test_distinct_is_rejected() {
    let error = err(SelectStatement::from_table("users").column("id").distinct());
    assert_eq!(error, TranslateError::SelectDistinct);
}

#[test]
fn test_group_by_without_join_is_rejected() {
    let error = err(SelectStatement::from_table("users")
        .column("role")
        .group_by("role"));
    assert_eq!(error, TranslateError::GroupByWithoutJoin);
}

#[test]
fn test_group_by_with_join_is_accepted() {
    let result = ok(authors_books()
        .column("a.name")
        .target(ProjectionEntry::aggregate("count", "b.id").with_alias("book_count"))
        .group_by("a.name"));
    assert_eq!(one(&result, "select"), "name,books(id.count():book_count)");
    assert!(!result.params.contains_key("group_by"));
}

#[test]
fn test_unknown_qualifier_in_projection() {
    let error = err(authors_books().column("x.name"));
    assert_eq!(error, TranslateError::UnknownQualifier("x".to_string()));
}

#[test]
fn test_right_join_is_rejected() {
    let stmt = SelectStatement::from_table("users").join(crate::ast::Join {
        kind: crate::ast::JoinKind::Right,
        relation: "books".to_string(),
        alias: None,
        on: None,
    });
    assert_eq!(err(stmt), TranslateError::UnsupportedJoin("right"));
}
