//! Literal values and their coercion to dialect text and JSON.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ast::SelectStatement;
use crate::error::{TranslateError, TranslateResult};

/// A literal value in a predicate or mutation body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Uuid(Uuid),
    Timestamp(DateTime<FixedOffset>),
    /// A scalar subquery. Representable so it can be rejected by name.
    Subquery(Box<SelectStatement>),
}

impl Value {
    /// Render this literal as dialect-safe filter text. Strings containing
    /// reserved characters are double-quoted with backslash escaping.
    pub(crate) fn to_query_text(&self) -> TranslateResult<String> {
        match self {
            Value::Null => Ok("null".to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Int(n) => Ok(n.to_string()),
            Value::Float(x) => {
                if x.is_finite() {
                    Ok(x.to_string())
                } else {
                    Err(TranslateError::NonFiniteNumber(*x))
                }
            }
            Value::String(s) => Ok(escape_literal(s)),
            Value::Uuid(u) => Ok(u.to_string()),
            Value::Timestamp(ts) => Ok(escape_literal(&ts.to_rfc3339())),
            Value::Subquery(_) => Err(TranslateError::Subqueries),
        }
    }

    /// Convert this literal to a JSON body value.
    pub(crate) fn to_json(&self) -> TranslateResult<serde_json::Value> {
        match self {
            Value::Null => Ok(serde_json::Value::Null),
            Value::Bool(b) => Ok((*b).into()),
            Value::Int(n) => Ok((*n).into()),
            Value::Float(x) => serde_json::Number::from_f64(*x)
                .map(serde_json::Value::Number)
                .ok_or(TranslateError::NonFiniteNumber(*x)),
            Value::String(s) => Ok(s.as_str().into()),
            Value::Uuid(u) => Ok(u.to_string().into()),
            Value::Timestamp(ts) => Ok(ts.to_rfc3339().into()),
            Value::Subquery(_) => Err(TranslateError::Subqueries),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => write!(f, "'{}'", s),
            Value::Uuid(u) => write!(f, "'{}'", u),
            Value::Timestamp(ts) => write!(f, "'{}'", ts.to_rfc3339()),
            Value::Subquery(_) => write!(f, "(SUBQUERY)"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Uuid> for Value {
    fn from(u: Uuid) -> Self {
        Value::Uuid(u)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(ts: DateTime<FixedOffset>) -> Self {
        Value::Timestamp(ts)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(ts: DateTime<Utc>) -> Self {
        Value::Timestamp(ts.fixed_offset())
    }
}

/// Quote a string literal for use in filter values when it contains
/// characters the dialect reserves for its own syntax, or when it would be
/// mistaken for a keyword.
pub(crate) fn escape_literal(s: &str) -> String {
    if !needs_quoting(s) {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

fn needs_quoting(s: &str) -> bool {
    s.is_empty()
        || s.starts_with(' ')
        || s.ends_with(' ')
        || matches!(s, "null" | "true" | "false")
        || s.chars().any(|c| matches!(c, ',' | '(' | ')' | '"' | '\\'))
}
