//! SELECT translation.

use crate::ast::SelectStatement;
use crate::error::{TranslateError, TranslateResult};
use crate::request::{ConversionResult, Method};

use super::aliases::AliasMap;
use super::{filter, order, projection};

pub(crate) fn build_select(stmt: &SelectStatement) -> TranslateResult<ConversionResult> {
    if !stmt.ctes.is_empty() {
        return Err(TranslateError::CommonTableExpressions);
    }
    if stmt.having.is_some() {
        return Err(TranslateError::Having);
    }
    if stmt.distinct {
        return Err(TranslateError::SelectDistinct);
    }

    let aliases = AliasMap::build(&stmt.from, &stmt.joins)?;

    if !stmt.group_by.is_empty() {
        if !aliases.has_joins() {
            return Err(TranslateError::GroupByWithoutJoin);
        }
        // Grouping is implicit in embedded aggregates; the columns are only
        // resolved so a stale qualifier still fails loudly.
        for column in &stmt.group_by {
            aliases.resolve(column)?;
        }
    }

    let mut result = ConversionResult::new(Method::Get, aliases.primary_relation()?);

    if let Some(select) = projection::build_select_param(&stmt.targets, &aliases)? {
        result.params.append("select", select);
    }
    if let Some(predicate) = &stmt.filter {
        filter::translate_filter(predicate, &aliases, &mut result.params)?;
    }
    order::translate_order(&stmt.order_by, &aliases, &mut result.params)?;
    order::translate_paging(stmt.limit, stmt.offset, &mut result.params);

    Ok(result)
}
