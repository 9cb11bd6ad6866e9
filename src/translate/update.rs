//! UPDATE translation.

use serde_json::{Map, Value as Json};

use crate::ast::{Expr, UpdateStatement};
use crate::error::{TranslateError, TranslateResult};
use crate::request::{ConversionResult, Method};

use super::aliases::AliasMap;
use super::{filter, projection};

pub(crate) fn build_update(stmt: &UpdateStatement) -> TranslateResult<ConversionResult> {
    // An unconditional UPDATE against a resource endpoint would write every
    // row; the engine never synthesizes a filter on the caller's behalf.
    let predicate = stmt
        .filter
        .as_ref()
        .ok_or(TranslateError::UnfilteredMutation("UPDATE"))?;
    if stmt.assignments.is_empty() {
        return Err(TranslateError::EmptyUpdate);
    }

    let aliases = AliasMap::single(&stmt.table, stmt.alias.as_deref());
    let mut result = ConversionResult::new(Method::Patch, &stmt.table);

    // Later duplicate columns overwrite earlier ones.
    let mut object = Map::new();
    for (column, expr) in &stmt.assignments {
        let value = match expr {
            Expr::Value(value) => value.to_json()?,
            other => return Err(TranslateError::ComputedAssignment(other.kind())),
        };
        object.insert(column.clone(), value);
    }
    result.body = Some(Json::Object(object).to_string());

    if let Some(select) = projection::build_select_param(&stmt.returning, &aliases)? {
        result.params.append("select", select);
    }
    filter::translate_filter(predicate, &aliases, &mut result.params)?;

    result
        .headers
        .insert("Content-Type".to_string(), "application/json".to_string());
    result
        .headers
        .insert("Prefer".to_string(), "return=representation".to_string());

    Ok(result)
}
