//! Dispatcher-level rejection tests.

use pretty_assertions::assert_eq;

use super::err;
use crate::ast::{CteDef, PredicateNode, SelectStatement, Value};
use crate::error::TranslateError;

#[test]
fn test_missing_from_is_rejected() {
    assert_eq!(err(SelectStatement::default()), TranslateError::MissingFrom);
}

#[test]
fn test_cte_is_rejected() {
    let mut stmt = SelectStatement::from_table("users");
    stmt.ctes.push(CteDef {
        name: "recent".to_string(),
        query: Box::new(SelectStatement::from_table("logins")),
    });
    assert_eq!(err(stmt), TranslateError::CommonTableExpressions);
}

#[test]
fn test_having_is_rejected() {
    let mut stmt = SelectStatement::from_table("users");
    stmt.having = Some(PredicateNode::gt("count", 1));
    assert_eq!(err(stmt), TranslateError::Having);
}

#[test]
fn test_subquery_in_membership_is_rejected() {
    let stmt = SelectStatement::from_table("users").filter(PredicateNode::in_list(
        "id",
        [Value::Subquery(Box::new(SelectStatement::from_table(
            "banned",
        )))],
    ));
    assert_eq!(err(stmt), TranslateError::Subqueries);
}

#[test]
fn test_non_finite_float_is_rejected() {
    let stmt = SelectStatement::from_table("t").filter(PredicateNode::eq("x", f64::NAN));
    assert!(matches!(
        err(stmt),
        TranslateError::NonFiniteNumber(_)
    ));
}
