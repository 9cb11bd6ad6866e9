//! Boolean filter trees.

use serde::{Deserialize, Serialize};

use crate::ast::{ColumnRef, ComparisonOp, Expr, Value};

/// A node of the boolean filter tree. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PredicateNode {
    /// `column op value`.
    Comparison {
        column: Expr,
        op: ComparisonOp,
        /// Parenthetical operator modifier, e.g. a full-text language tag.
        #[serde(default)]
        modifier: Option<String>,
        value: Value,
    },
    /// `column [NOT] IN (values...)`.
    Membership {
        column: ColumnRef,
        values: Vec<Value>,
        #[serde(default)]
        negate: bool,
    },
    /// `column [NOT] BETWEEN low AND high`.
    Range {
        column: ColumnRef,
        low: Value,
        high: Value,
        #[serde(default)]
        negate: bool,
    },
    /// `column [NOT] [I]LIKE pattern`.
    Pattern {
        column: ColumnRef,
        pattern: String,
        #[serde(default)]
        case_insensitive: bool,
        #[serde(default)]
        negate: bool,
    },
    /// `column IS [NOT] NULL`.
    NullCheck { column: ColumnRef, is_null: bool },
    Conjunction(Vec<PredicateNode>),
    Disjunction(Vec<PredicateNode>),
    Negation(Box<PredicateNode>),
}

impl PredicateNode {
    pub fn cmp(
        column: impl Into<ColumnRef>,
        op: ComparisonOp,
        value: impl Into<Value>,
    ) -> Self {
        PredicateNode::Comparison {
            column: Expr::Column(column.into()),
            op,
            modifier: None,
            value: value.into(),
        }
    }

    pub fn eq(column: impl Into<ColumnRef>, value: impl Into<Value>) -> Self {
        Self::cmp(column, ComparisonOp::Eq, value)
    }

    pub fn ne(column: impl Into<ColumnRef>, value: impl Into<Value>) -> Self {
        Self::cmp(column, ComparisonOp::Neq, value)
    }

    pub fn gt(column: impl Into<ColumnRef>, value: impl Into<Value>) -> Self {
        Self::cmp(column, ComparisonOp::Gt, value)
    }

    pub fn gte(column: impl Into<ColumnRef>, value: impl Into<Value>) -> Self {
        Self::cmp(column, ComparisonOp::Gte, value)
    }

    pub fn lt(column: impl Into<ColumnRef>, value: impl Into<Value>) -> Self {
        Self::cmp(column, ComparisonOp::Lt, value)
    }

    pub fn lte(column: impl Into<ColumnRef>, value: impl Into<Value>) -> Self {
        Self::cmp(column, ComparisonOp::Lte, value)
    }

    pub fn and(children: impl IntoIterator<Item = PredicateNode>) -> Self {
        PredicateNode::Conjunction(children.into_iter().collect())
    }

    pub fn or(children: impl IntoIterator<Item = PredicateNode>) -> Self {
        PredicateNode::Disjunction(children.into_iter().collect())
    }

    pub fn not(child: PredicateNode) -> Self {
        PredicateNode::Negation(Box::new(child))
    }

    pub fn between(
        column: impl Into<ColumnRef>,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> Self {
        PredicateNode::Range {
            column: column.into(),
            low: low.into(),
            high: high.into(),
            negate: false,
        }
    }

    pub fn not_between(
        column: impl Into<ColumnRef>,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> Self {
        PredicateNode::Range {
            column: column.into(),
            low: low.into(),
            high: high.into(),
            negate: true,
        }
    }

    pub fn in_list<I, V>(column: impl Into<ColumnRef>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        PredicateNode::Membership {
            column: column.into(),
            values: values.into_iter().map(Into::into).collect(),
            negate: false,
        }
    }

    pub fn not_in<I, V>(column: impl Into<ColumnRef>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        PredicateNode::Membership {
            column: column.into(),
            values: values.into_iter().map(Into::into).collect(),
            negate: true,
        }
    }

    pub fn like(column: impl Into<ColumnRef>, pattern: impl Into<String>) -> Self {
        PredicateNode::Pattern {
            column: column.into(),
            pattern: pattern.into(),
            case_insensitive: false,
            negate: false,
        }
    }

    pub fn ilike(column: impl Into<ColumnRef>, pattern: impl Into<String>) -> Self {
        PredicateNode::Pattern {
            column: column.into(),
            pattern: pattern.into(),
            case_insensitive: true,
            negate: false,
        }
    }

    pub fn is_null(column: impl Into<ColumnRef>) -> Self {
        PredicateNode::NullCheck {
            column: column.into(),
            is_null: true,
        }
    }

    pub fn is_not_null(column: impl Into<ColumnRef>) -> Self {
        PredicateNode::NullCheck {
            column: column.into(),
            is_null: false,
        }
    }
}
