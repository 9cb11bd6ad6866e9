//! Scalar expressions.

use serde::{Deserialize, Serialize};

use crate::ast::{ColumnRef, Value};
use crate::error::{TranslateError, TranslateResult};

/// A scalar expression. Only plain column references translate; the other
/// kinds exist so the engine can name what it rejects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Column(ColumnRef),
    Function { name: String, args: Vec<Expr> },
    Value(Value),
}

impl Expr {
    pub fn column(name: impl Into<ColumnRef>) -> Self {
        Expr::Column(name.into())
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Expr::Value(value.into())
    }

    /// Node kind for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Expr::Column(_) => "column",
            Expr::Function { .. } => "function call",
            Expr::Value(_) => "literal",
        }
    }

    pub(crate) fn as_column(&self) -> TranslateResult<&ColumnRef> {
        match self {
            Expr::Column(column) => Ok(column),
            other => Err(TranslateError::ComputedColumn(other.kind())),
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Column(column) => write!(f, "{}", column),
            Expr::Function { name, args } => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            Expr::Value(value) => write!(f, "{}", value),
        }
    }
}
