//! Statement trees.

use serde::{Deserialize, Serialize};

use crate::ast::{Expr, JoinKind, PredicateNode, ProjectionEntry, SortKey, Value};

/// A column reference, optionally qualified by a table alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRef {
    #[serde(default)]
    pub qualifier: Option<String>,
    pub name: String,
}

impl ColumnRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            qualifier: None,
            name: name.into(),
        }
    }

    pub fn qualified(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            qualifier: Some(qualifier.into()),
            name: name.into(),
        }
    }
}

impl From<&str> for ColumnRef {
    /// Splits a single leading `alias.` qualifier; anything else is taken
    /// verbatim as a column name.
    fn from(s: &str) -> Self {
        match s.split_once('.') {
            Some((qualifier, name)) if !qualifier.is_empty() && !name.contains('.') => {
                Self::qualified(qualifier, name)
            }
            _ => Self::new(s),
        }
    }
}

impl From<String> for ColumnRef {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl std::fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.qualifier {
            Some(qualifier) => write!(f, "{}.{}", qualifier, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// One FROM-clause relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FromItem {
    pub relation: String,
    #[serde(default)]
    pub alias: Option<String>,
}

impl FromItem {
    pub fn new(relation: impl Into<String>) -> Self {
        Self {
            relation: relation.into(),
            alias: None,
        }
    }

    pub fn aliased(relation: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            relation: relation.into(),
            alias: Some(alias.into()),
        }
    }
}

/// The equality condition of a JOIN clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinOn {
    pub left: ColumnRef,
    pub right: ColumnRef,
}

/// One JOIN clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Join {
    pub kind: JoinKind,
    pub relation: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub on: Option<JoinOn>,
}

impl Join {
    pub fn inner(relation: impl Into<String>) -> Self {
        Self {
            kind: JoinKind::Inner,
            relation: relation.into(),
            alias: None,
            on: None,
        }
    }

    pub fn left(relation: impl Into<String>) -> Self {
        Self {
            kind: JoinKind::Left,
            relation: relation.into(),
            alias: None,
            on: None,
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn on(mut self, left: impl Into<ColumnRef>, right: impl Into<ColumnRef>) -> Self {
        self.on = Some(JoinOn {
            left: left.into(),
            right: right.into(),
        });
        self
    }
}

/// A common table expression. Representable so it can be rejected by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CteDef {
    pub name: String,
    pub query: Box<SelectStatement>,
}

/// ON CONFLICT clause of an INSERT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnConflict {
    pub columns: Vec<String>,
    pub action: ConflictAction,
}

impl OnConflict {
    /// `ON CONFLICT (columns) DO NOTHING`.
    pub fn do_nothing<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            action: ConflictAction::DoNothing,
        }
    }

    /// `ON CONFLICT (columns) DO UPDATE`.
    pub fn merge<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            action: ConflictAction::DoUpdate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictAction {
    DoNothing,
    DoUpdate,
}

/// A SELECT statement tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectStatement {
    pub from: Vec<FromItem>,
    #[serde(default)]
    pub joins: Vec<Join>,
    #[serde(default)]
    pub targets: Vec<ProjectionEntry>,
    #[serde(default)]
    pub filter: Option<PredicateNode>,
    #[serde(default)]
    pub group_by: Vec<ColumnRef>,
    #[serde(default)]
    pub having: Option<PredicateNode>,
    #[serde(default)]
    pub order_by: Vec<SortKey>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub distinct: bool,
    #[serde(default)]
    pub ctes: Vec<CteDef>,
}

/// An INSERT statement tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InsertStatement {
    pub table: String,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<Value>>,
    /// `INSERT ... SELECT` source. Representable so it can be rejected.
    #[serde(default)]
    pub source: Option<Box<SelectStatement>>,
    #[serde(default)]
    pub on_conflict: Option<OnConflict>,
    #[serde(default)]
    pub returning: Vec<ProjectionEntry>,
}

/// An UPDATE statement tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateStatement {
    pub table: String,
    #[serde(default)]
    pub alias: Option<String>,
    pub assignments: Vec<(String, Expr)>,
    #[serde(default)]
    pub filter: Option<PredicateNode>,
    #[serde(default)]
    pub returning: Vec<ProjectionEntry>,
}

/// A DELETE statement tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteStatement {
    pub table: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub filter: Option<PredicateNode>,
    #[serde(default)]
    pub returning: Vec<ProjectionEntry>,
}

/// One parsed statement, ready for translation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Select(SelectStatement),
    Insert(InsertStatement),
    Update(UpdateStatement),
    Delete(DeleteStatement),
}

impl From<SelectStatement> for Statement {
    fn from(stmt: SelectStatement) -> Self {
        Statement::Select(stmt)
    }
}

impl From<InsertStatement> for Statement {
    fn from(stmt: InsertStatement) -> Self {
        Statement::Insert(stmt)
    }
}

impl From<UpdateStatement> for Statement {
    fn from(stmt: UpdateStatement) -> Self {
        Statement::Update(stmt)
    }
}

impl From<DeleteStatement> for Statement {
    fn from(stmt: DeleteStatement) -> Self {
        Statement::Delete(stmt)
    }
}
