//! ORDER BY / LIMIT / OFFSET translation.

use crate::ast::SortKey;
use crate::error::TranslateResult;
use crate::request::QueryParams;

use super::aliases::{AliasMap, ResolvedColumn};

/// Render the `order` parameter: `column.asc|desc[.nullsfirst|nullslast]`,
/// comma-joined in source order. The parameter is unqualified, so any alias
/// qualifier is validated against the map and then stripped.
pub(crate) fn translate_order(
    keys: &[SortKey],
    aliases: &AliasMap,
    params: &mut QueryParams,
) -> TranslateResult<()> {
    if keys.is_empty() {
        return Ok(());
    }
    let mut parts = Vec::with_capacity(keys.len());
    for key in keys {
        let name = match aliases.resolve(&key.column)? {
            ResolvedColumn::Primary { column } | ResolvedColumn::Joined { column, .. } => column,
        };
        let mut part = format!("{name}.{}", key.direction.token());
        if let Some(nulls) = key.nulls {
            part.push('.');
            part.push_str(nulls.token());
        }
        parts.push(part);
    }
    params.append("order", parts.join(","));
    Ok(())
}

/// LIMIT and OFFSET map one-to-one; absence is omitted, never defaulted.
pub(crate) fn translate_paging(limit: Option<u64>, offset: Option<u64>, params: &mut QueryParams) {
    if let Some(n) = limit {
        params.append("limit", n.to_string());
    }
    if let Some(n) = offset {
        params.append("offset", n.to_string());
    }
}
