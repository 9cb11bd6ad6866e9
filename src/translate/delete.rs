//! DELETE translation.

use crate::ast::DeleteStatement;
use crate::error::{TranslateError, TranslateResult};
use crate::request::{ConversionResult, Method};

use super::aliases::AliasMap;
use super::{filter, projection};

pub(crate) fn build_delete(stmt: &DeleteStatement) -> TranslateResult<ConversionResult> {
    // Same safety policy as UPDATE: no filter, no translation.
    let predicate = stmt
        .filter
        .as_ref()
        .ok_or(TranslateError::UnfilteredMutation("DELETE"))?;

    let aliases = AliasMap::single(&stmt.table, stmt.alias.as_deref());
    let mut result = ConversionResult::new(Method::Delete, &stmt.table);

    if let Some(select) = projection::build_select_param(&stmt.returning, &aliases)? {
        result.params.append("select", select);
    }
    filter::translate_filter(predicate, &aliases, &mut result.params)?;

    result
        .headers
        .insert("Prefer".to_string(), "return=representation".to_string());

    Ok(result)
}
