//! Error types for translation.

use thiserror::Error;

/// A statement could not be translated. Every error is terminal: a single
/// unsupported clause invalidates the whole statement, there is no partial
/// output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TranslateError {
    // Unsupported constructs: tree shapes the engine does not understand.
    #[error("cannot filter on a {0} expression; only plain column references are supported")]
    ComputedColumn(&'static str),

    #[error("SET value is a {0} expression; only literal values can be written")]
    ComputedAssignment(&'static str),

    #[error("unknown table or alias '{0}'")]
    UnknownQualifier(String),

    #[error("statement has no FROM relation")]
    MissingFrom,

    #[error("multiple FROM relations without an explicit join are ambiguous")]
    ImplicitJoin,

    #[error("join on '{0}' has no usable ON condition")]
    UnqualifiedJoin(String),

    #[error("{0} joins cannot be expressed; only inner and left joins translate")]
    UnsupportedJoin(&'static str),

    #[error("alias '{0}' is bound more than once")]
    DuplicateAlias(String),

    #[error("boolean group has no operands")]
    EmptyGroup,

    #[error("IN list for column '{0}' is empty")]
    EmptyInList(String),

    #[error("operator '{0}' cannot compare against NULL; use IS NULL")]
    NullComparison(String),

    #[error("operator '{0}' has no equivalent in the target dialect")]
    UnsupportedOperator(String),

    #[error("INSERT has no VALUES rows")]
    EmptyInsert,

    #[error("UPDATE has no SET assignments")]
    EmptyUpdate,

    #[error("INSERT row {row} has {got} values but {want} columns were named")]
    InsertArity { row: usize, got: usize, want: usize },

    #[error("numeric literal {0} has no JSON representation")]
    NonFiniteNumber(f64),

    // Unsupported features: recognized SQL with no dialect equivalent.
    #[error("common table expressions are not supported; create a view and query it instead")]
    CommonTableExpressions,

    #[error("subqueries are not supported; create a view and query it instead")]
    Subqueries,

    #[error("window functions are not supported")]
    WindowFunctions,

    #[error("HAVING is not supported")]
    Having,

    #[error("GROUP BY without a join has nothing to embed the aggregate into; create a view and query it instead")]
    GroupByWithoutJoin,

    #[error("SELECT DISTINCT has no equivalent in the target dialect")]
    SelectDistinct,

    #[error("aggregate function '{0}' is not supported")]
    UnsupportedAggregate(String),

    #[error("aggregate '{0}' requires a column argument")]
    AggregateNeedsColumn(String),

    // Safety guard.
    #[error("{0} without a WHERE clause would affect every row; refusing to translate")]
    UnfilteredMutation(&'static str),

    // Resource bound on adversarially deep predicate trees.
    #[error("filter tree exceeds the maximum nesting depth of {0}")]
    FilterTooDeep(usize),
}

/// Result type alias for translation.
pub type TranslateResult<T> = Result<T, TranslateError>;
