//! Plain descriptors for tables defined outside of Rust code.
//!
//! A configuration source (a JSON or TOML file, say) produces a list of
//! [`TableDescriptor`]s; converting one into a [`Table`] applies the same
//! column rules as building the table by hand.

use super::{Column, Strategy, Table};
use crate::{Error, Result};

#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TableDescriptor {
    pub type_name: String,
    pub name: String,
    pub alias: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub columns: Vec<ColumnDescriptor>,
}

#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ColumnDescriptor {
    pub name: String,
    pub field: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub field_type: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub strategy: Strategy,
    #[cfg_attr(feature = "serde", serde(default))]
    pub primary_key: bool,
}

impl From<ColumnDescriptor> for Column {
    fn from(src: ColumnDescriptor) -> Column {
        Column::new(src.name, src.field)
            .with_field_type(src.field_type)
            .with_strategy(src.strategy)
            .with_primary_key(src.primary_key)
    }
}

impl From<&Column> for ColumnDescriptor {
    fn from(src: &Column) -> ColumnDescriptor {
        ColumnDescriptor {
            name: src.name().to_string(),
            field: src.field().to_string(),
            field_type: src.field_type().to_string(),
            strategy: src.strategy(),
            primary_key: src.is_primary_key(),
        }
    }
}

impl TryFrom<TableDescriptor> for Table {
    type Error = Error;

    fn try_from(src: TableDescriptor) -> Result<Table> {
        let mut table = Table::new(src.type_name, src.name, src.alias);
        table
            .add_columns(src.columns.into_iter().map(Column::from))
            .map_err(|err| err.context(crate::err!("loading table `{}`", table.name())))?;
        Ok(table)
    }
}

impl From<&Table> for TableDescriptor {
    fn from(src: &Table) -> TableDescriptor {
        TableDescriptor {
            type_name: src.type_name().to_string(),
            name: src.name().to_string(),
            alias: src.alias().to_string(),
            columns: src.columns().map(ColumnDescriptor::from).collect(),
        }
    }
}
