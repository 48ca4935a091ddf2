use super::{Column, Reference};
use crate::{error::DuplicateOf, Error, MissingMetadata, Result, Unmapped};

use std::{
    collections::{BTreeMap, HashMap},
    fmt,
};

/// Maps one structure type to one relational table.
#[derive(Debug, Clone)]
pub struct Table {
    /// Identifies the table within a [`Schema`](super::Schema)
    id: TableId,

    /// Fully-qualified name of the mapped type
    type_name: String,

    /// Name of the table
    name: String,

    /// Alias used to qualify columns in SELECT statements
    alias: String,

    /// Columns keyed by column name. Iteration order is the column order used
    /// everywhere else.
    columns: BTreeMap<String, Column>,

    /// Source field name to column name
    fields: HashMap<String, String>,

    /// Edges to and from other tables of the same schema
    references: Vec<Reference>,
}

/// Uniquely identifies a table within a schema
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct TableId(pub usize);

impl Table {
    pub fn new(
        type_name: impl Into<String>,
        name: impl Into<String>,
        alias: impl Into<String>,
    ) -> Self {
        Self {
            id: TableId::placeholder(),
            type_name: type_name.into(),
            name: name.into(),
            alias: alias.into(),
            columns: BTreeMap::new(),
            fields: HashMap::new(),
            references: vec![],
        }
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn set_type_name(&mut self, type_name: impl Into<String>) {
        self.type_name = type_name.into();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_alias(&mut self, alias: impl Into<String>) {
        self.alias = alias.into();
    }

    pub(crate) fn set_id(&mut self, id: TableId) {
        self.id = id;
    }

    /// Adds a column, failing if its name or field is already mapped.
    pub fn add_column(&mut self, column: Column) -> Result<()> {
        if self.columns.contains_key(column.name()) {
            return Err(Error::duplicate_column(
                &self.name,
                DuplicateOf::Name,
                column.name(),
            ));
        }

        if self.fields.contains_key(column.field()) {
            return Err(Error::duplicate_column(
                &self.name,
                DuplicateOf::Field,
                column.field(),
            ));
        }

        self.fields
            .insert(column.field().to_string(), column.name().to_string());
        self.columns.insert(column.name().to_string(), column);
        Ok(())
    }

    /// Adds columns in order, stopping at the first conflict. Columns added
    /// before the conflicting one stay in the table.
    pub fn add_columns(&mut self, columns: impl IntoIterator<Item = Column>) -> Result<()> {
        for column in columns {
            self.add_column(column)?;
        }
        Ok(())
    }

    /// All columns, sorted by column name.
    pub fn columns(&self) -> impl ExactSizeIterator<Item = &Column> + '_ {
        self.columns.values()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    pub fn column_by_field(&self, field: &str) -> Option<&Column> {
        self.fields.get(field).and_then(|name| self.columns.get(name))
    }

    /// Columns matching `pred`, sorted by column name.
    pub fn find_columns(&self, mut pred: impl FnMut(&Column) -> bool) -> Vec<&Column> {
        self.columns().filter(|column| pred(column)).collect()
    }

    /// First column, by name order, matching `pred`.
    pub fn find_column(&self, mut pred: impl FnMut(&Column) -> bool) -> Option<&Column> {
        self.columns().find(|column| pred(column))
    }

    pub fn primary_key_columns(&self) -> Vec<&Column> {
        self.find_columns(|column| column.is_primary_key())
    }

    pub fn non_primary_key_columns(&self) -> Vec<&Column> {
        self.find_columns(|column| !column.is_primary_key())
    }

    /// Name of the column mapped from `field`.
    pub fn column_name(&self, field: &str) -> Result<&str> {
        self.fields
            .get(field)
            .map(String::as_str)
            .ok_or_else(|| Error::no_mapping(&self.name, Unmapped::Field, field))
    }

    /// Source field of the column called `name`.
    pub fn field_name(&self, name: &str) -> Result<&str> {
        self.columns
            .get(name)
            .map(Column::field)
            .ok_or_else(|| Error::no_mapping(&self.name, Unmapped::Column, name))
    }

    /// Checks that the table carries everything query generation and
    /// evaluation rely on.
    pub fn validate(&self) -> Result<()> {
        let missing = if self.type_name.is_empty() {
            MissingMetadata::TypeName
        } else if self.name.is_empty() {
            MissingMetadata::TableName
        } else if self.alias.is_empty() {
            MissingMetadata::TableAlias
        } else if self.columns.is_empty() {
            MissingMetadata::Columns
        } else if self.columns().any(|column| column.name().is_empty()) {
            MissingMetadata::ColumnName
        } else if self.columns().any(|column| column.field().is_empty()) {
            MissingMetadata::ColumnField
        } else if !self.columns().any(Column::is_primary_key) {
            MissingMetadata::PrimaryKey
        } else if self.columns().all(Column::is_primary_key) {
            MissingMetadata::NonPrimaryKey
        } else {
            return Ok(());
        };

        Err(Error::missing_metadata(&self.name, missing))
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// References this table takes part in, as parent or as child.
    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    /// Records `reference` unless an equal one is already present. Returns
    /// `true` if the reference was added.
    pub(crate) fn push_reference(&mut self, reference: Reference) -> bool {
        if self.references.contains(&reference) {
            return false;
        }
        self.references.push(reference);
        true
    }

    /// The reference from this table (as child) to `parent`.
    pub fn references_to(&self, parent: &Table) -> Result<&Reference> {
        self.references
            .iter()
            .find(|r| r.child() == self.id && r.parent() == parent.id)
            .ok_or_else(|| Error::missing_reference(&self.name, &parent.name))
    }

    /// The reference from `child` to this table (as parent).
    pub fn referenced_by(&self, child: &Table) -> Result<&Reference> {
        self.references
            .iter()
            .find(|r| r.parent() == self.id && r.child() == child.id)
            .ok_or_else(|| Error::missing_reference(&child.name, &self.name))
    }

    pub fn has_reference_to(&self, parent: &Table) -> bool {
        self.references_to(parent).is_ok()
    }

    pub fn is_referenced_by(&self, child: &Table) -> bool {
        self.referenced_by(child).is_ok()
    }

    /// True if any other table references this one.
    pub fn is_referenced(&self) -> bool {
        self.references.iter().any(|r| r.parent() == self.id)
    }
}

/// Structural equality: type name, table name and the set of columns.
impl PartialEq for Table {
    fn eq(&self, other: &Table) -> bool {
        self.type_name == other.type_name
            && self.name == other.name
            && self.columns == other.columns
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} AS {} ({})", self.name, self.alias, self.type_name)
    }
}

impl TableId {
    pub(crate) fn placeholder() -> Self {
        Self(usize::MAX)
    }

    pub fn is_placeholder(self) -> bool {
        self.0 == usize::MAX
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_placeholder() {
            fmt.write_str("TableId(-)")
        } else {
            write!(fmt, "TableId({})", self.0)
        }
    }
}
