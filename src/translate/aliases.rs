//! FROM/JOIN alias resolution.

use indexmap::IndexMap;

use crate::ast::{ColumnRef, FromItem, Join, JoinKind};
use crate::error::{TranslateError, TranslateResult};

/// One relation binding in statement scope.
#[derive(Debug, Clone, PartialEq)]
struct AliasBinding {
    relation: String,
    primary: bool,
    /// The joined relation must match (inner join semantics).
    inner: bool,
}

/// Alias → relation map for one statement. Built once by the resolver and
/// read-only afterward; passed by reference into the sub-translators.
#[derive(Debug, Default)]
pub(crate) struct AliasMap {
    bindings: IndexMap<String, AliasBinding>,
}

/// A column reference classified against the alias map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ResolvedColumn<'a> {
    Primary { column: &'a str },
    Joined { relation: &'a str, column: &'a str },
}

impl AliasMap {
    /// Walk the FROM/JOIN graph once. Exactly one FROM relation is allowed;
    /// further relations must arrive as explicit joins with resolvable ON
    /// conditions.
    pub fn build(from: &[FromItem], joins: &[Join]) -> TranslateResult<Self> {
        let mut map = AliasMap::default();
        match from {
            [] => return Err(TranslateError::MissingFrom),
            [item] => map.bind(item.alias.as_deref().unwrap_or(&item.relation), &item.relation, true, false)?,
            _ => return Err(TranslateError::ImplicitJoin),
        }
        for join in joins {
            let inner = match join.kind {
                JoinKind::Inner => true,
                JoinKind::Left => false,
                JoinKind::Right => return Err(TranslateError::UnsupportedJoin("right")),
                JoinKind::Full => return Err(TranslateError::UnsupportedJoin("full")),
            };
            let alias = join.alias.as_deref().unwrap_or(&join.relation);
            map.bind(alias, &join.relation, false, inner)?;
        }
        // ON conditions may reference any alias in the statement, including
        // ones bound after the join itself, so validate once all exist.
        for join in joins {
            let on = join
                .on
                .as_ref()
                .ok_or_else(|| TranslateError::UnqualifiedJoin(join.relation.clone()))?;
            map.check_qualifier(&on.left)?;
            map.check_qualifier(&on.right)?;
        }
        Ok(map)
    }

    /// A map over a single relation, for mutations.
    pub fn single(relation: &str, alias: Option<&str>) -> Self {
        let mut bindings = IndexMap::new();
        bindings.insert(
            alias.unwrap_or(relation).to_string(),
            AliasBinding {
                relation: relation.to_string(),
                primary: true,
                inner: false,
            },
        );
        Self { bindings }
    }

    fn bind(&mut self, alias: &str, relation: &str, primary: bool, inner: bool) -> TranslateResult<()> {
        let binding = AliasBinding {
            relation: relation.to_string(),
            primary,
            inner,
        };
        if self.bindings.insert(alias.to_string(), binding).is_some() {
            return Err(TranslateError::DuplicateAlias(alias.to_string()));
        }
        Ok(())
    }

    fn check_qualifier(&self, column: &ColumnRef) -> TranslateResult<()> {
        if let Some(qualifier) = &column.qualifier {
            if !self.bindings.contains_key(qualifier.as_str()) {
                return Err(TranslateError::UnknownQualifier(qualifier.clone()));
            }
        }
        Ok(())
    }

    /// Classify a column reference. Unqualified references resolve to the
    /// primary relation.
    pub fn resolve<'a>(&'a self, column: &'a ColumnRef) -> TranslateResult<ResolvedColumn<'a>> {
        let binding = match &column.qualifier {
            None => self.primary()?,
            Some(qualifier) => self
                .bindings
                .get(qualifier.as_str())
                .ok_or_else(|| TranslateError::UnknownQualifier(qualifier.clone()))?,
        };
        if binding.primary {
            Ok(ResolvedColumn::Primary {
                column: &column.name,
            })
        } else {
            Ok(ResolvedColumn::Joined {
                relation: &binding.relation,
                column: &column.name,
            })
        }
    }

    fn primary(&self) -> TranslateResult<&AliasBinding> {
        self.bindings
            .values()
            .find(|binding| binding.primary)
            .ok_or(TranslateError::MissingFrom)
    }

    pub fn primary_relation(&self) -> TranslateResult<&str> {
        self.primary().map(|binding| binding.relation.as_str())
    }

    /// Distinct joined relations in binding order, with their inner-join
    /// flag. Self-join aliases collapse into one entry.
    pub fn embedded(&self) -> Vec<(&str, bool)> {
        let mut relations: Vec<(&str, bool)> = Vec::new();
        for binding in self.bindings.values() {
            if binding.primary {
                continue;
            }
            match relations
                .iter_mut()
                .find(|(name, _)| *name == binding.relation.as_str())
            {
                Some((_, inner)) => *inner = *inner || binding.inner,
                None => relations.push((binding.relation.as_str(), binding.inner)),
            }
        }
        relations
    }

    pub fn has_joins(&self) -> bool {
        self.bindings.values().any(|binding| !binding.primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users_books() -> AliasMap {
        AliasMap::build(
            &[FromItem::aliased("users", "u")],
            &[Join::left("books").alias("b").on("b.owner_id", "u.id")],
        )
        .unwrap()
    }

    #[test]
    fn test_unqualified_column_is_primary() {
        let map = users_books();
        assert_eq!(
            map.resolve(&ColumnRef::new("name")).unwrap(),
            ResolvedColumn::Primary { column: "name" }
        );
    }

    #[test]
    fn test_join_alias_resolves_to_relation_name() {
        let map = users_books();
        assert_eq!(
            map.resolve(&ColumnRef::qualified("b", "title")).unwrap(),
            ResolvedColumn::Joined {
                relation: "books",
                column: "title"
            }
        );
    }

    #[test]
    fn test_unknown_qualifier() {
        let map = users_books();
        assert_eq!(
            map.resolve(&ColumnRef::qualified("x", "title")),
            Err(TranslateError::UnknownQualifier("x".to_string()))
        );
    }

    #[test]
    fn test_self_join_keeps_both_aliases() {
        let map = AliasMap::build(
            &[FromItem::aliased("employees", "e")],
            &[Join::left("employees")
                .alias("m")
                .on("m.id", "e.manager_id")],
        )
        .unwrap();
        assert_eq!(
            map.resolve(&ColumnRef::qualified("m", "name")).unwrap(),
            ResolvedColumn::Joined {
                relation: "employees",
                column: "name"
            }
        );
        assert_eq!(map.embedded(), vec![("employees", false)]);
    }

    #[test]
    fn test_multiple_from_items_are_ambiguous() {
        assert_eq!(
            AliasMap::build(&[FromItem::new("a"), FromItem::new("b")], &[]).unwrap_err(),
            TranslateError::ImplicitJoin
        );
    }

    #[test]
    fn test_join_without_on_is_rejected() {
        assert_eq!(
            AliasMap::build(&[FromItem::new("users")], &[Join::left("books")]).unwrap_err(),
            TranslateError::UnqualifiedJoin("books".to_string())
        );
    }

    #[test]
    fn test_duplicate_alias_is_rejected() {
        assert_eq!(
            AliasMap::build(
                &[FromItem::aliased("users", "u")],
                &[Join::left("books").alias("u").on("u.id", "u.id")]
            )
            .unwrap_err(),
            TranslateError::DuplicateAlias("u".to_string())
        );
    }
}
