//! Translation tests.

mod errors;
mod mutations;
mod projections;

use crate::ast::Statement;
use crate::error::TranslateError;
use crate::request::ConversionResult;
use crate::translate::translate;

/// Translate a statement that must succeed.
fn ok(statement: impl Into<Statement>) -> ConversionResult {
    translate(&statement.into()).expect("translation should succeed")
}

/// Translate a statement that must fail.
fn err(statement: impl Into<Statement>) -> TranslateError {
    translate(&statement.into()).expect_err("translation should fail")
}

/// All values appended under one parameter key.
fn values<'a>(result: &'a ConversionResult, key: &str) -> Vec<&'a str> {
    result
        .params
        .get(key)
        .map(|vs| vs.iter().map(String::as_str).collect())
        .unwrap_or_default()
}

/// The single value under one parameter key.
fn one<'a>(result: &'a ConversionResult, key: &str) -> &'a str {
    let vs = values(result, key);
    assert_eq!(vs.len(), 1, "expected exactly one value under '{key}'");
    vs[0]
}
