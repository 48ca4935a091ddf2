use relmap_core::{err, Column, Reference, Result, Schema, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Insert,
    Update,
    Delete,
    Select,
}

/// A statement against one table, ready to be serialized.
///
/// `key` holds the columns filtered on in the WHERE clause and `rest` the
/// columns an update assigns. For a table these are its primary-key and
/// non-primary-key columns. For a reference they are the child's foreign-key
/// columns and everything else on the child.
#[derive(Debug, Clone)]
pub struct Statement<'a> {
    pub kind: StatementKind,

    pub table: &'a Table,

    pub key: Vec<&'a Column>,

    pub rest: Vec<&'a Column>,
}

impl<'a> Statement<'a> {
    pub fn insert(table: &'a Table) -> Result<Statement<'a>> {
        Statement::for_table(StatementKind::Insert, table)
    }

    pub fn update(table: &'a Table) -> Result<Statement<'a>> {
        Statement::for_table(StatementKind::Update, table)
    }

    pub fn delete(table: &'a Table) -> Result<Statement<'a>> {
        Statement::for_table(StatementKind::Delete, table)
    }

    pub fn select(table: &'a Table) -> Result<Statement<'a>> {
        Statement::for_table(StatementKind::Select, table)
    }

    /// Selects the child rows of `reference`, filtered by foreign key.
    pub fn scoped_select(schema: &'a Schema, reference: &'a Reference) -> Result<Statement<'a>> {
        Statement::for_reference(StatementKind::Select, schema, reference)
    }

    /// Deletes the child rows of `reference`, filtered by foreign key.
    pub fn scoped_delete(schema: &'a Schema, reference: &'a Reference) -> Result<Statement<'a>> {
        Statement::for_reference(StatementKind::Delete, schema, reference)
    }

    pub fn for_table(kind: StatementKind, table: &'a Table) -> Result<Statement<'a>> {
        table.validate()?;

        Ok(Statement {
            kind,
            table,
            key: table.primary_key_columns(),
            rest: table.non_primary_key_columns(),
        })
    }

    fn for_reference(
        kind: StatementKind,
        schema: &'a Schema,
        reference: &'a Reference,
    ) -> Result<Statement<'a>> {
        let child = schema
            .get(reference.child())
            .ok_or_else(|| err!("reference child {:?} is not in the schema", reference.child()))?;

        child.validate()?;

        Ok(Statement {
            kind,
            table: child,
            key: reference.foreign_key().iter().collect(),
            rest: reference.non_foreign_key_columns(child),
        })
    }

    /// Every column of the table, sorted by name.
    pub fn columns(&self) -> impl Iterator<Item = &'a Column> + 'a {
        self.table.columns()
    }

    pub fn is_update(&self) -> bool {
        self.kind == StatementKind::Update
    }
}
