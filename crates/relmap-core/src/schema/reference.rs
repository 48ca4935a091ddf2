use super::{Column, Table, TableId};

/// A foreign-key edge: `child.foreign_key` points at `parent`.
///
/// Both tables store an equal copy of the edge. Tables are addressed by id,
/// so the copies never go stale when a table is modified later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    parent: TableId,
    child: TableId,
    foreign_key: Vec<Column>,
}

impl Reference {
    pub(crate) fn new(parent: TableId, child: TableId, foreign_key: Vec<Column>) -> Self {
        Self {
            parent,
            child,
            foreign_key,
        }
    }

    pub fn parent(&self) -> TableId {
        self.parent
    }

    pub fn child(&self) -> TableId {
        self.child
    }

    /// Foreign key columns on the child, in the order they were given.
    pub fn foreign_key(&self) -> &[Column] {
        &self.foreign_key
    }

    /// Child columns that are not part of the foreign key, sorted by name.
    pub fn non_foreign_key_columns<'a>(&self, child: &'a Table) -> Vec<&'a Column> {
        child.find_columns(|column| {
            !self
                .foreign_key
                .iter()
                .any(|fk| fk.name() == column.name())
        })
    }
}
