//! Statement translation into REST request descriptions.

mod aliases;
mod filter;
mod order;
mod projection;

mod delete;
mod insert;
mod select;
mod update;

#[cfg(test)]
mod tests;

use crate::ast::Statement;
use crate::error::TranslateResult;
use crate::request::ConversionResult;

pub use filter::MAX_FILTER_DEPTH;

/// Trait for turning statement trees into request descriptions.
pub trait ToRequest {
    fn to_request(&self) -> TranslateResult<ConversionResult>;
}

impl ToRequest for Statement {
    fn to_request(&self) -> TranslateResult<ConversionResult> {
        translate(self)
    }
}

/// Translate one statement. Pure routing by statement kind; each builder
/// applies its own feature and safety policy.
pub fn translate(statement: &Statement) -> TranslateResult<ConversionResult> {
    let result = match statement {
        Statement::Select(stmt) => select::build_select(stmt),
        Statement::Insert(stmt) => insert::build_insert(stmt),
        Statement::Update(stmt) => update::build_update(stmt),
        Statement::Delete(stmt) => delete::build_delete(stmt),
    }?;
    log::debug!(
        "{} {} with {} query parameter(s)",
        result.method,
        result.path,
        result.params.len()
    );
    Ok(result)
}
