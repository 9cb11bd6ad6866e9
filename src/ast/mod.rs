//! Statement trees consumed by the translator.
//!
//! Everything here is a closed tagged variant built once per statement and
//! immutable afterward. Trees normally arrive from a SQL parser; the
//! chainable constructors exist for consumers (and tests) that build them
//! directly.

mod builders;
mod expr;
mod operators;
mod predicate;
mod projection;
mod stmt;
mod values;

pub use expr::Expr;
pub use operators::{
    AggregateFunc, ComparisonOp, JoinKind, NullsOrder, OPERATOR_TABLE, SortDirection,
};
pub use predicate::PredicateNode;
pub use projection::{JsonStep, ProjectionEntry, SortKey};
pub use stmt::{
    ColumnRef, ConflictAction, CteDef, DeleteStatement, FromItem, InsertStatement, Join, JoinOn,
    OnConflict, SelectStatement, Statement, UpdateStatement,
};
pub use values::Value;

pub(crate) use values::escape_literal;
