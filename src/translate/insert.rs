//! INSERT translation.

use serde_json::{Map, Value as Json};

use crate::ast::{ConflictAction, InsertStatement};
use crate::error::{TranslateError, TranslateResult};
use crate::request::{ConversionResult, Method};

use super::aliases::AliasMap;
use super::projection;

pub(crate) fn build_insert(stmt: &InsertStatement) -> TranslateResult<ConversionResult> {
    if stmt.source.is_some() {
        return Err(TranslateError::Subqueries);
    }
    if stmt.rows.is_empty() {
        return Err(TranslateError::EmptyInsert);
    }

    let mut result = ConversionResult::new(Method::Post, &stmt.table);

    // The body is always an array, even for a single row.
    let mut rows: Vec<Json> = Vec::with_capacity(stmt.rows.len());
    for (index, row) in stmt.rows.iter().enumerate() {
        if !stmt.columns.is_empty() && row.len() != stmt.columns.len() {
            return Err(TranslateError::InsertArity {
                row: index + 1,
                got: row.len(),
                want: stmt.columns.len(),
            });
        }
        let mut object = Map::new();
        for (position, value) in row.iter().enumerate() {
            let key = match stmt.columns.get(position) {
                Some(name) => name.clone(),
                // Positional names, as assigned to a bare VALUES list.
                None => format!("column{}", position + 1),
            };
            object.insert(key, value.to_json()?);
        }
        rows.push(Json::Object(object));
    }
    result.body = Some(Json::Array(rows).to_string());

    let mut prefer = vec!["return=representation"];
    if let Some(conflict) = &stmt.on_conflict {
        if !conflict.columns.is_empty() {
            result
                .params
                .append("on_conflict", conflict.columns.join(","));
        }
        prefer.push(match conflict.action {
            ConflictAction::DoUpdate => "resolution=merge-duplicates",
            ConflictAction::DoNothing => "resolution=ignore-duplicates",
        });
    }

    let aliases = AliasMap::single(&stmt.table, None);
    if let Some(select) = projection::build_select_param(&stmt.returning, &aliases)? {
        result.params.append("select", select);
    }

    result
        .headers
        .insert("Content-Type".to_string(), "application/json".to_string());
    result
        .headers
        .insert("Prefer".to_string(), prefer.join(","));

    Ok(result)
}
