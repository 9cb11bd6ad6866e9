//! SELECT-list translation into the `select` parameter.

use crate::ast::{AggregateFunc, ColumnRef, JsonStep, ProjectionEntry};
use crate::error::{TranslateError, TranslateResult};

use super::aliases::{AliasMap, ResolvedColumn};

/// Accumulates the rendered projection entries of one joined relation until
/// the final concatenation.
#[derive(Debug)]
struct EmbedGroup {
    relation: String,
    inner: bool,
    entries: Vec<String>,
}

/// Build the `select` parameter value for a target list.
///
/// Returns `None` for the bare-wildcard default with no joins, where the
/// dialect needs no parameter at all.
pub(crate) fn build_select_param(
    targets: &[ProjectionEntry],
    aliases: &AliasMap,
) -> TranslateResult<Option<String>> {
    let bare = targets.is_empty() || matches!(targets, [ProjectionEntry::Wildcard]);
    if bare && !aliases.has_joins() {
        return Ok(None);
    }

    let mut flat: Vec<String> = Vec::new();
    // One group per distinct joined relation, in join order, whether or not
    // any target references it.
    let mut groups: Vec<EmbedGroup> = aliases
        .embedded()
        .into_iter()
        .map(|(relation, inner)| EmbedGroup {
            relation: relation.to_string(),
            inner,
            entries: Vec::new(),
        })
        .collect();

    if bare {
        flat.push("*".to_string());
    } else {
        for entry in targets {
            render_entry(entry, aliases, &mut flat, &mut groups)?;
        }
    }

    let mut parts = flat;
    for group in groups {
        let marker = if group.inner { "!inner" } else { "" };
        parts.push(format!(
            "{}{marker}({})",
            group.relation,
            group.entries.join(",")
        ));
    }
    Ok(Some(parts.join(",")))
}

/// Render one target and file it under the primary flat list or its joined
/// relation's embed group.
fn render_entry(
    entry: &ProjectionEntry,
    aliases: &AliasMap,
    flat: &mut Vec<String>,
    groups: &mut [EmbedGroup],
) -> TranslateResult<()> {
    match entry {
        ProjectionEntry::Wildcard => {
            flat.push("*".to_string());
            Ok(())
        }
        ProjectionEntry::Window { .. } => Err(TranslateError::WindowFunctions),
        ProjectionEntry::Column { column, alias } => {
            let (name, relation) = classify(column, aliases)?;
            push(with_alias(name.to_string(), alias), relation, flat, groups);
            Ok(())
        }
        ProjectionEntry::Cast {
            column,
            target_type,
            alias,
        } => {
            let (name, relation) = classify(column, aliases)?;
            push(
                with_alias(format!("{name}::{target_type}"), alias),
                relation,
                flat,
                groups,
            );
            Ok(())
        }
        ProjectionEntry::JsonPath {
            column,
            steps,
            alias,
        } => {
            let (name, relation) = classify(column, aliases)?;
            push(
                with_alias(render_json_path(name, steps), alias),
                relation,
                flat,
                groups,
            );
            Ok(())
        }
        ProjectionEntry::Aggregate {
            function,
            column,
            alias,
        } => {
            let func = AggregateFunc::from_name(function)?;
            match column {
                Some(column) => {
                    let (name, relation) = classify(column, aliases)?;
                    push(
                        with_alias(format!("{name}.{}()", func.token()), alias),
                        relation,
                        flat,
                        groups,
                    );
                }
                None if func == AggregateFunc::Count => {
                    flat.push(with_alias("count()".to_string(), alias));
                }
                None => {
                    return Err(TranslateError::AggregateNeedsColumn(function.clone()));
                }
            }
            Ok(())
        }
    }
}

/// Split a column into its bare name and, when it targets a joined
/// relation, that relation's name.
fn classify<'a>(
    column: &'a ColumnRef,
    aliases: &'a AliasMap,
) -> TranslateResult<(&'a str, Option<&'a str>)> {
    match aliases.resolve(column)? {
        ResolvedColumn::Primary { column } => Ok((column, None)),
        ResolvedColumn::Joined { relation, column } => Ok((column, Some(relation))),
    }
}

fn push(rendered: String, relation: Option<&str>, flat: &mut Vec<String>, groups: &mut [EmbedGroup]) {
    match relation {
        None => flat.push(rendered),
        Some(name) => {
            if let Some(group) = groups.iter_mut().find(|group| group.relation == name) {
                group.entries.push(rendered);
            }
        }
    }
}

fn render_json_path(name: &str, steps: &[JsonStep]) -> String {
    let mut rendered = name.to_string();
    for step in steps {
        rendered.push_str(if step.as_text { "->>" } else { "->" });
        rendered.push_str(&step.key);
    }
    rendered
}

fn with_alias(rendered: String, alias: &Option<String>) -> String {
    match alias {
        Some(alias) => format!("{rendered}:{alias}"),
        None => rendered,
    }
}
