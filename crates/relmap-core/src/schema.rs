mod column;
pub use column::{Column, Strategy};

pub mod descriptor;

mod reference;
pub use reference::Reference;

mod table;
pub use table::{Table, TableId};

use crate::{Error, Result};

/// Owns a set of tables and the references between them.
#[derive(Debug, Default, Clone)]
pub struct Schema {
    tables: Vec<Table>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `table`, assigning it the returned id.
    pub fn add(&mut self, mut table: Table) -> TableId {
        let id = TableId(self.tables.len());
        table.set_id(id);
        self.tables.push(table);
        id
    }

    pub fn table(&self, id: impl Into<TableId>) -> &Table {
        self.tables.get(id.into().0).expect("invalid table ID")
    }

    pub fn get(&self, id: TableId) -> Option<&Table> {
        self.tables.get(id.0)
    }

    /// Mutable access for adding columns. References are managed through
    /// [`Schema::references`].
    pub fn table_mut(&mut self, id: TableId) -> Option<&mut Table> {
        self.tables.get_mut(id.0)
    }

    pub fn tables(&self) -> impl ExactSizeIterator<Item = &Table> + '_ {
        self.tables.iter()
    }

    /// The first table mapping `type_name`.
    pub fn find(&self, type_name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.type_name() == type_name)
    }

    /// Records that `child` references `parent` through the child columns
    /// named in `keys`.
    ///
    /// Both tables must be valid and every key must name a child column. On
    /// failure neither table is modified.
    pub fn references(
        &mut self,
        child: TableId,
        parent: TableId,
        keys: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<&Reference> {
        let (child_table, parent_table) = match (self.get(child), self.get(parent)) {
            (Some(child), Some(parent)) => (child, parent),
            _ => crate::bail!("unknown table id: {child:?} or {parent:?}"),
        };

        child_table.validate()?;
        parent_table.validate()?;

        let mut foreign_key = vec![];
        let mut missing = vec![];

        for key in keys {
            let key = key.as_ref();
            match child_table.column(key) {
                Some(column) => foreign_key.push(column.clone()),
                None => missing.push(key.to_string()),
            }
        }

        if !missing.is_empty() || foreign_key.is_empty() {
            return Err(Error::missing_foreign_key_columns(
                child_table.name(),
                missing,
            ));
        }

        tracing::debug!(
            child = child_table.name(),
            parent = parent_table.name(),
            columns = foreign_key.len(),
            "establishing reference"
        );

        let reference = Reference::new(parent, child, foreign_key);

        self.tables[parent.0].push_reference(reference.clone());
        self.tables[child.0].push_reference(reference.clone());

        let child_table = &self.tables[child.0];
        let stored = child_table
            .references()
            .iter()
            .find(|r| **r == reference)
            .ok_or_else(|| crate::err!("reference was not recorded on `{}`", child_table.name()))?;
        Ok(stored)
    }
}
