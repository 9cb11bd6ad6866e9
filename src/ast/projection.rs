//! SELECT targets and ORDER BY keys.

use serde::{Deserialize, Serialize};

use crate::ast::{ColumnRef, NullsOrder, SortDirection};

/// One step of a JSON path chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonStep {
    pub key: String,
    /// Extract as text (`->>`) instead of as JSON (`->`).
    #[serde(default)]
    pub as_text: bool,
}

impl JsonStep {
    pub fn json(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            as_text: false,
        }
    }

    pub fn text(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            as_text: true,
        }
    }
}

/// One SELECT target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProjectionEntry {
    Column {
        column: ColumnRef,
        #[serde(default)]
        alias: Option<String>,
    },
    Wildcard,
    /// `column::type`, optionally aliased.
    Cast {
        column: ColumnRef,
        target_type: String,
        #[serde(default)]
        alias: Option<String>,
    },
    /// A JSON path chain rooted at a column.
    JsonPath {
        column: ColumnRef,
        steps: Vec<JsonStep>,
        #[serde(default)]
        alias: Option<String>,
    },
    /// An aggregate call; `column: None` is the bare `count(*)` form.
    Aggregate {
        function: String,
        column: Option<ColumnRef>,
        #[serde(default)]
        alias: Option<String>,
    },
    /// A window call. Representable so it can be rejected by name.
    Window { function: String },
}

impl ProjectionEntry {
    pub fn column(column: impl Into<ColumnRef>) -> Self {
        ProjectionEntry::Column {
            column: column.into(),
            alias: None,
        }
    }

    pub fn cast(column: impl Into<ColumnRef>, target_type: impl Into<String>) -> Self {
        ProjectionEntry::Cast {
            column: column.into(),
            target_type: target_type.into(),
            alias: None,
        }
    }

    pub fn json_path(column: impl Into<ColumnRef>, steps: Vec<JsonStep>) -> Self {
        ProjectionEntry::JsonPath {
            column: column.into(),
            steps,
            alias: None,
        }
    }

    pub fn aggregate(function: impl Into<String>, column: impl Into<ColumnRef>) -> Self {
        ProjectionEntry::Aggregate {
            function: function.into(),
            column: Some(column.into()),
            alias: None,
        }
    }

    /// Bare `count(*)`.
    pub fn count_star() -> Self {
        ProjectionEntry::Aggregate {
            function: "count".to_string(),
            column: None,
            alias: None,
        }
    }

    /// Attach an output alias. No-op for wildcards and window calls.
    pub fn with_alias(mut self, name: impl Into<String>) -> Self {
        match &mut self {
            ProjectionEntry::Column { alias, .. }
            | ProjectionEntry::Cast { alias, .. }
            | ProjectionEntry::JsonPath { alias, .. }
            | ProjectionEntry::Aggregate { alias, .. } => *alias = Some(name.into()),
            ProjectionEntry::Wildcard | ProjectionEntry::Window { .. } => {}
        }
        self
    }
}

/// One ORDER BY key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortKey {
    pub column: ColumnRef,
    pub direction: SortDirection,
    #[serde(default)]
    pub nulls: Option<NullsOrder>,
}

impl SortKey {
    pub fn asc(column: impl Into<ColumnRef>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Asc,
            nulls: None,
        }
    }

    pub fn desc(column: impl Into<ColumnRef>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Desc,
            nulls: None,
        }
    }

    pub fn nulls(mut self, order: NullsOrder) -> Self {
        self.nulls = Some(order);
        self
    }
}
