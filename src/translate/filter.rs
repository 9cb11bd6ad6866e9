//! WHERE-clause translation.
//!
//! A conjunction renders as independent query parameters (the dialect ANDs
//! repeated keys); a disjunction renders as one parenthesized `or` group
//! whose members recurse through `and(...)`, `or(...)` and `not.` prefixes.

use crate::ast::{ColumnRef, ComparisonOp, PredicateNode, Value, escape_literal};
use crate::error::{TranslateError, TranslateResult};
use crate::request::QueryParams;

use super::aliases::{AliasMap, ResolvedColumn};

/// Upper bound on boolean-tree nesting before translation fails, so an
/// adversarially deep tree cannot exhaust the call stack.
pub const MAX_FILTER_DEPTH: usize = 32;

/// Translate a filter tree into query parameters.
pub(crate) fn translate_filter(
    predicate: &PredicateNode,
    aliases: &AliasMap,
    params: &mut QueryParams,
) -> TranslateResult<()> {
    flatten(predicate, false, aliases, params, 0)
}

/// Render one conjunction level. Simple predicates become independent flat
/// parameters; disjunction children become `or` groups; negation flips the
/// context and cancels pairwise.
fn flatten(
    predicate: &PredicateNode,
    negated: bool,
    aliases: &AliasMap,
    params: &mut QueryParams,
    depth: usize,
) -> TranslateResult<()> {
    check_depth(depth)?;
    match predicate {
        PredicateNode::Conjunction(children) => {
            if negated {
                params.append("not.and", render_group(children, aliases, depth + 1)?);
            } else {
                for child in children {
                    flatten(child, false, aliases, params, depth + 1)?;
                }
            }
        }
        PredicateNode::Disjunction(children) => {
            let key = if negated { "not.or" } else { "or" };
            params.append(key, render_group(children, aliases, depth + 1)?);
        }
        PredicateNode::Negation(inner) => flatten(inner, !negated, aliases, params, depth + 1)?,
        PredicateNode::Comparison {
            column,
            op,
            modifier,
            value,
        } => {
            let key = filter_key(column.as_column()?, aliases)?;
            if let Value::Null = value {
                let null = null_is(*op)? != negated;
                params.append(key, null_check_value(null));
            } else {
                let rendered = format!("{}.{}", render_op(*op, modifier)?, value.to_query_text()?);
                params.append(key, prefix_not(negated, rendered));
            }
        }
        PredicateNode::Membership {
            column,
            values,
            negate,
        } => {
            let rendered = format!("in.({})", render_list(column, values)?);
            params.append(
                filter_key(column, aliases)?,
                prefix_not(*negate != negated, rendered),
            );
        }
        PredicateNode::Range {
            column,
            low,
            high,
            negate,
        } => {
            let key = filter_key(column, aliases)?;
            let low = low.to_query_text()?;
            let high = high.to_query_text()?;
            if *negate != negated {
                // NOT BETWEEN cannot split across two entries: repeated keys
                // AND together, which would negate each bound separately.
                params.append(key, format!("not.and(gte.{low},lte.{high})"));
            } else {
                params.append(key.clone(), format!("gte.{low}"));
                params.append(key, format!("lte.{high}"));
            }
        }
        PredicateNode::Pattern {
            column,
            pattern,
            case_insensitive,
            negate,
        } => {
            let rendered = render_pattern(*case_insensitive, pattern)?;
            params.append(
                filter_key(column, aliases)?,
                prefix_not(*negate != negated, rendered),
            );
        }
        PredicateNode::NullCheck { column, is_null } => {
            let null = *is_null != negated;
            params.append(filter_key(column, aliases)?, null_check_value(null));
        }
    }
    Ok(())
}

/// Render a boolean group as `(member,member,...)`.
fn render_group(
    children: &[PredicateNode],
    aliases: &AliasMap,
    depth: usize,
) -> TranslateResult<String> {
    check_depth(depth)?;
    if children.is_empty() {
        return Err(TranslateError::EmptyGroup);
    }
    let members = children
        .iter()
        .map(|child| render_member(child, false, aliases, depth))
        .collect::<TranslateResult<Vec<_>>>()?;
    Ok(format!("({})", members.join(",")))
}

/// Render one group member. Negation prefixes the member's rendering with
/// `not.`; nested groups recurse as `and(...)` / `or(...)`.
fn render_member(
    predicate: &PredicateNode,
    negated: bool,
    aliases: &AliasMap,
    depth: usize,
) -> TranslateResult<String> {
    check_depth(depth)?;
    match predicate {
        PredicateNode::Conjunction(children) => Ok(prefix_not(
            negated,
            format!("and{}", render_group(children, aliases, depth + 1)?),
        )),
        PredicateNode::Disjunction(children) => Ok(prefix_not(
            negated,
            format!("or{}", render_group(children, aliases, depth + 1)?),
        )),
        PredicateNode::Negation(inner) => render_member(inner, !negated, aliases, depth + 1),
        PredicateNode::Comparison {
            column,
            op,
            modifier,
            value,
        } => {
            let key = filter_key(column.as_column()?, aliases)?;
            if let Value::Null = value {
                let null = null_is(*op)? != negated;
                Ok(null_check_member(&key, null))
            } else {
                let rendered = format!(
                    "{key}.{}.{}",
                    render_op(*op, modifier)?,
                    value.to_query_text()?
                );
                Ok(prefix_not(negated, rendered))
            }
        }
        PredicateNode::Membership {
            column,
            values,
            negate,
        } => {
            let key = filter_key(column, aliases)?;
            let rendered = format!("{key}.in.({})", render_list(column, values)?);
            Ok(prefix_not(*negate != negated, rendered))
        }
        PredicateNode::Range {
            column,
            low,
            high,
            negate,
        } => {
            let key = filter_key(column, aliases)?;
            let rendered = format!(
                "and({key}.gte.{},{key}.lte.{})",
                low.to_query_text()?,
                high.to_query_text()?
            );
            Ok(prefix_not(*negate != negated, rendered))
        }
        PredicateNode::Pattern {
            column,
            pattern,
            case_insensitive,
            negate,
        } => {
            let key = filter_key(column, aliases)?;
            let rendered = format!("{key}.{}", render_pattern(*case_insensitive, pattern)?);
            Ok(prefix_not(*negate != negated, rendered))
        }
        PredicateNode::NullCheck { column, is_null } => {
            let key = filter_key(column, aliases)?;
            Ok(null_check_member(&key, *is_null != negated))
        }
    }
}

/// Parameter key for a column: bare for the primary relation, qualified by
/// the relation name for embedded resources.
fn filter_key(column: &ColumnRef, aliases: &AliasMap) -> TranslateResult<String> {
    match aliases.resolve(column)? {
        ResolvedColumn::Primary { column } => Ok(column.to_string()),
        ResolvedColumn::Joined { relation, column } => Ok(format!("{relation}.{column}")),
    }
}

fn render_op(op: ComparisonOp, modifier: &Option<String>) -> TranslateResult<String> {
    let token = op.token()?;
    Ok(match modifier {
        Some(modifier) => format!("{token}({modifier})"),
        None => token.to_string(),
    })
}

fn render_list(column: &ColumnRef, values: &[Value]) -> TranslateResult<String> {
    if values.is_empty() {
        return Err(TranslateError::EmptyInList(column.name.clone()));
    }
    Ok(values
        .iter()
        .map(Value::to_query_text)
        .collect::<TranslateResult<Vec<_>>>()?
        .join(","))
}

fn render_pattern(case_insensitive: bool, pattern: &str) -> TranslateResult<String> {
    let op = if case_insensitive {
        ComparisonOp::ILike
    } else {
        ComparisonOp::Like
    };
    Ok(format!("{}.{}", op.token()?, escape_literal(&map_wildcards(pattern))))
}

/// Map SQL LIKE wildcards to the dialect's: `%` becomes `*`; `_` is the
/// single-character wildcard in both languages and passes through.
fn map_wildcards(pattern: &str) -> String {
    pattern
        .chars()
        .map(|c| if c == '%' { '*' } else { c })
        .collect()
}

/// Whether a NULL comparison asserts null-ness. Only equality forms coerce;
/// ordering against NULL has no meaning in the dialect.
fn null_is(op: ComparisonOp) -> TranslateResult<bool> {
    match op {
        ComparisonOp::Eq => Ok(true),
        ComparisonOp::Neq => Ok(false),
        other => Err(TranslateError::NullComparison(
            other.sql_symbol().to_string(),
        )),
    }
}

fn null_check_value(is_null: bool) -> String {
    let rendered = if is_null { "is.null" } else { "not.is.null" };
    rendered.to_string()
}

fn null_check_member(key: &str, is_null: bool) -> String {
    prefix_not(!is_null, format!("{key}.is.null"))
}

fn prefix_not(negated: bool, rendered: String) -> String {
    if negated {
        format!("not.{rendered}")
    } else {
        rendered
    }
}

fn check_depth(depth: usize) -> TranslateResult<()> {
    if depth > MAX_FILTER_DEPTH {
        return Err(TranslateError::FilterTooDeep(MAX_FILTER_DEPTH));
    }
    Ok(())
}
