//! Chainable construction methods for statements.

use crate::ast::{
    ColumnRef, DeleteStatement, Expr, FromItem, InsertStatement, Join, OnConflict, PredicateNode,
    ProjectionEntry, SelectStatement, SortKey, UpdateStatement, Value,
};

impl SelectStatement {
    pub fn from_table(relation: impl Into<String>) -> Self {
        Self {
            from: vec![FromItem::new(relation)],
            ..Default::default()
        }
    }

    pub fn from_aliased(relation: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            from: vec![FromItem::aliased(relation, alias)],
            ..Default::default()
        }
    }

    pub fn column(mut self, column: impl Into<ColumnRef>) -> Self {
        self.targets.push(ProjectionEntry::column(column));
        self
    }

    pub fn columns<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ColumnRef>,
    {
        self.targets
            .extend(columns.into_iter().map(ProjectionEntry::column));
        self
    }

    pub fn target(mut self, entry: ProjectionEntry) -> Self {
        self.targets.push(entry);
        self
    }

    pub fn wildcard(mut self) -> Self {
        self.targets.push(ProjectionEntry::Wildcard);
        self
    }

    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    /// Add a filter; successive calls AND together.
    pub fn filter(mut self, predicate: PredicateNode) -> Self {
        self.filter = Some(match self.filter.take() {
            None => predicate,
            Some(existing) => PredicateNode::and([existing, predicate]),
        });
        self
    }

    pub fn group_by(mut self, column: impl Into<ColumnRef>) -> Self {
        self.group_by.push(column.into());
        self
    }

    pub fn order_by(mut self, key: SortKey) -> Self {
        self.order_by.push(key);
        self
    }

    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    pub fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }
}

impl InsertStatement {
    pub fn into_table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Default::default()
        }
    }

    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn row<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.rows
            .push(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn on_conflict(mut self, conflict: OnConflict) -> Self {
        self.on_conflict = Some(conflict);
        self
    }

    pub fn returning(mut self, entry: ProjectionEntry) -> Self {
        self.returning.push(entry);
        self
    }
}

impl UpdateStatement {
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Default::default()
        }
    }

    pub fn set(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.assignments
            .push((column.into(), Expr::Value(value.into())));
        self
    }

    pub fn set_expr(mut self, column: impl Into<String>, expr: Expr) -> Self {
        self.assignments.push((column.into(), expr));
        self
    }

    /// Add a filter; successive calls AND together.
    pub fn filter(mut self, predicate: PredicateNode) -> Self {
        self.filter = Some(match self.filter.take() {
            None => predicate,
            Some(existing) => PredicateNode::and([existing, predicate]),
        });
        self
    }

    pub fn returning(mut self, entry: ProjectionEntry) -> Self {
        self.returning.push(entry);
        self
    }
}

impl DeleteStatement {
    pub fn from_table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Default::default()
        }
    }

    /// Add a filter; successive calls AND together.
    pub fn filter(mut self, predicate: PredicateNode) -> Self {
        self.filter = Some(match self.filter.take() {
            None => predicate,
            Some(existing) => PredicateNode::and([existing, predicate]),
        });
        self
    }

    pub fn returning(mut self, entry: ProjectionEntry) -> Self {
        self.returning.push(entry);
        self
    }
}
