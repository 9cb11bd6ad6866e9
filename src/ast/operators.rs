//! Operators, sort directions and join kinds.

use serde::{Deserialize, Serialize};

use crate::error::{TranslateError, TranslateResult};

/// Comparison operator of a filter predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOp {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
    ILike,
    /// POSIX regular expression match (`~`).
    Match,
    /// Case-insensitive regular expression match (`~*`).
    IMatch,
    /// Array/range containment (`@>`).
    Contains,
    /// Contained by (`<@`).
    ContainedBy,
    /// Overlap (`&&`).
    Overlaps,
    /// Range strictly left of (`<<`).
    StrictlyLeft,
    /// Range strictly right of (`>>`).
    StrictlyRight,
    /// Range does not extend to the right of (`&<`).
    NotExtendsRight,
    /// Range does not extend to the left of (`&>`).
    NotExtendsLeft,
    /// Ranges adjacent (`-|-`).
    Adjacent,
    /// IS DISTINCT FROM.
    IsDistinct,
    /// Full-text search (`@@` against `to_tsquery`).
    TextSearch,
    /// Full-text search against `plainto_tsquery`.
    PlainTextSearch,
    /// Full-text search against `phraseto_tsquery`.
    PhraseTextSearch,
    /// Full-text search against `websearch_to_tsquery`.
    WebTextSearch,
}

/// Operator table: one row per comparison operator, mapping it to the token
/// used inside filter values. Lookups that miss the table are reported as
/// unsupported rather than guessed.
pub const OPERATOR_TABLE: &[(ComparisonOp, &str)] = &[
    (ComparisonOp::Eq, "eq"),
    (ComparisonOp::Neq, "neq"),
    (ComparisonOp::Gt, "gt"),
    (ComparisonOp::Gte, "gte"),
    (ComparisonOp::Lt, "lt"),
    (ComparisonOp::Lte, "lte"),
    (ComparisonOp::Like, "like"),
    (ComparisonOp::ILike, "ilike"),
    (ComparisonOp::Match, "match"),
    (ComparisonOp::IMatch, "imatch"),
    (ComparisonOp::Contains, "cs"),
    (ComparisonOp::ContainedBy, "cd"),
    (ComparisonOp::Overlaps, "ov"),
    (ComparisonOp::StrictlyLeft, "sl"),
    (ComparisonOp::StrictlyRight, "sr"),
    (ComparisonOp::NotExtendsRight, "nxr"),
    (ComparisonOp::NotExtendsLeft, "nxl"),
    (ComparisonOp::Adjacent, "adj"),
    (ComparisonOp::IsDistinct, "isdistinct"),
    (ComparisonOp::TextSearch, "fts"),
    (ComparisonOp::PlainTextSearch, "plfts"),
    (ComparisonOp::PhraseTextSearch, "phfts"),
    (ComparisonOp::WebTextSearch, "wfts"),
];

impl ComparisonOp {
    /// The SQL spelling of this operator. The four text-search forms share
    /// `@@` and differ only in how the query side is constructed.
    pub fn sql_symbol(&self) -> &'static str {
        match self {
            ComparisonOp::Eq => "=",
            ComparisonOp::Neq => "<>",
            ComparisonOp::Gt => ">",
            ComparisonOp::Gte => ">=",
            ComparisonOp::Lt => "<",
            ComparisonOp::Lte => "<=",
            ComparisonOp::Like => "LIKE",
            ComparisonOp::ILike => "ILIKE",
            ComparisonOp::Match => "~",
            ComparisonOp::IMatch => "~*",
            ComparisonOp::Contains => "@>",
            ComparisonOp::ContainedBy => "<@",
            ComparisonOp::Overlaps => "&&",
            ComparisonOp::StrictlyLeft => "<<",
            ComparisonOp::StrictlyRight => ">>",
            ComparisonOp::NotExtendsRight => "&<",
            ComparisonOp::NotExtendsLeft => "&>",
            ComparisonOp::Adjacent => "-|-",
            ComparisonOp::IsDistinct => "IS DISTINCT FROM",
            ComparisonOp::TextSearch
            | ComparisonOp::PlainTextSearch
            | ComparisonOp::PhraseTextSearch
            | ComparisonOp::WebTextSearch => "@@",
        }
    }

    /// Parse a SQL operator spelling. Unknown spellings are a named error,
    /// never approximated.
    pub fn from_sql_symbol(symbol: &str) -> TranslateResult<Self> {
        match symbol.to_ascii_lowercase().as_str() {
            "=" => Ok(ComparisonOp::Eq),
            "<>" | "!=" => Ok(ComparisonOp::Neq),
            ">" => Ok(ComparisonOp::Gt),
            ">=" => Ok(ComparisonOp::Gte),
            "<" => Ok(ComparisonOp::Lt),
            "<=" => Ok(ComparisonOp::Lte),
            "like" => Ok(ComparisonOp::Like),
            "ilike" => Ok(ComparisonOp::ILike),
            "~" => Ok(ComparisonOp::Match),
            "~*" => Ok(ComparisonOp::IMatch),
            "@>" => Ok(ComparisonOp::Contains),
            "<@" => Ok(ComparisonOp::ContainedBy),
            "&&" => Ok(ComparisonOp::Overlaps),
            "<<" => Ok(ComparisonOp::StrictlyLeft),
            ">>" => Ok(ComparisonOp::StrictlyRight),
            "&<" => Ok(ComparisonOp::NotExtendsRight),
            "&>" => Ok(ComparisonOp::NotExtendsLeft),
            "-|-" => Ok(ComparisonOp::Adjacent),
            "is distinct from" => Ok(ComparisonOp::IsDistinct),
            "@@" => Ok(ComparisonOp::TextSearch),
            _ => Err(TranslateError::UnsupportedOperator(symbol.to_string())),
        }
    }

    /// Dialect token from the operator table.
    pub fn token(&self) -> TranslateResult<&'static str> {
        OPERATOR_TABLE
            .iter()
            .find(|entry| entry.0 == *self)
            .map(|entry| entry.1)
            .ok_or_else(|| TranslateError::UnsupportedOperator(self.sql_symbol().to_string()))
    }
}

/// Sort direction of one ORDER BY key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub(crate) fn token(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// NULLS FIRST / NULLS LAST placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NullsOrder {
    First,
    Last,
}

impl NullsOrder {
    pub(crate) fn token(self) -> &'static str {
        match self {
            NullsOrder::First => "nullsfirst",
            NullsOrder::Last => "nullslast",
        }
    }
}

/// Join type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
}

/// Aggregate functions the dialect can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregateFunc {
    Count,
    Sum,
    Avg,
    Max,
    Min,
}

impl AggregateFunc {
    /// Look up an aggregate by SQL function name. Anything outside the
    /// supported set is a named error, not a pass-through.
    pub fn from_name(name: &str) -> TranslateResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "count" => Ok(AggregateFunc::Count),
            "sum" => Ok(AggregateFunc::Sum),
            "avg" => Ok(AggregateFunc::Avg),
            "max" => Ok(AggregateFunc::Max),
            "min" => Ok(AggregateFunc::Min),
            _ => Err(TranslateError::UnsupportedAggregate(name.to_string())),
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            AggregateFunc::Count => "count",
            AggregateFunc::Sum => "sum",
            AggregateFunc::Avg => "avg",
            AggregateFunc::Max => "max",
            AggregateFunc::Min => "min",
        }
    }
}

impl std::fmt::Display for AggregateFunc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_every_operator() {
        for (op, token) in OPERATOR_TABLE {
            assert_eq!(op.token().unwrap(), *token);
        }
    }

    #[test]
    fn test_table_rows() {
        assert_eq!(ComparisonOp::Eq.token().unwrap(), "eq");
        assert_eq!(ComparisonOp::Neq.token().unwrap(), "neq");
        assert_eq!(ComparisonOp::Match.token().unwrap(), "match");
        assert_eq!(ComparisonOp::Contains.token().unwrap(), "cs");
        assert_eq!(ComparisonOp::Adjacent.token().unwrap(), "adj");
        assert_eq!(ComparisonOp::WebTextSearch.token().unwrap(), "wfts");
    }

    #[test]
    fn test_symbol_round_trip() {
        assert_eq!(
            ComparisonOp::from_sql_symbol("<>").unwrap(),
            ComparisonOp::Neq
        );
        assert_eq!(
            ComparisonOp::from_sql_symbol("!=").unwrap(),
            ComparisonOp::Neq
        );
        assert_eq!(
            ComparisonOp::from_sql_symbol("ILIKE").unwrap(),
            ComparisonOp::ILike
        );
        assert_eq!(
            ComparisonOp::from_sql_symbol("@@").unwrap(),
            ComparisonOp::TextSearch
        );
    }

    #[test]
    fn test_unknown_symbol_is_rejected() {
        assert_eq!(
            ComparisonOp::from_sql_symbol("^@"),
            Err(TranslateError::UnsupportedOperator("^@".to_string()))
        );
    }

    #[test]
    fn test_unknown_aggregate_is_rejected() {
        assert_eq!(
            AggregateFunc::from_name("string_agg"),
            Err(TranslateError::UnsupportedAggregate("string_agg".to_string()))
        );
    }
}
