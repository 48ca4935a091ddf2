use pretty_assertions::assert_eq;
use relmap_core::{
    schema::descriptor::{ColumnDescriptor, TableDescriptor},
    MissingMetadata, Strategy, Table,
};
use std_util::prelude::*;

fn column(name: &str, field: &str, primary_key: bool) -> ColumnDescriptor {
    ColumnDescriptor {
        name: name.to_string(),
        field: field.to_string(),
        primary_key,
        ..Default::default()
    }
}

fn probes() -> TableDescriptor {
    TableDescriptor {
        type_name: "fleet::Probe".to_string(),
        name: "probes".to_string(),
        alias: "P".to_string(),
        columns: vec![
            column("id", "id", true),
            column("payload", "payload", false),
            ColumnDescriptor {
                strategy: Strategy::ComputedMember,
                ..column("label", "Label", false)
            },
        ],
    }
}

#[test]
fn descriptor_builds_table() {
    let table = assert_ok!(Table::try_from(probes()));

    assert_eq!(table.name(), "probes");
    assert_eq!(table.column_count(), 3);
    assert_eq!(
        assert_some!(table.column("label")).strategy(),
        Strategy::ComputedMember
    );
    assert_ok!(table.validate());
}

#[test]
fn table_converts_back_to_descriptor() {
    let table = assert_ok!(Table::try_from(probes()));
    let descriptor = TableDescriptor::from(&table);

    let names: Vec<_> = descriptor.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["id", "label", "payload"]);
    assert_eq!(assert_ok!(Table::try_from(descriptor)), table);
}

#[test]
fn duplicate_columns_fail_with_context() {
    let mut descriptor = probes();
    descriptor.columns.push(column("payload", "cargo", false));

    let err = assert_err!(Table::try_from(descriptor));
    assert_eq!(
        err.to_string(),
        "loading table `probes`: duplicate column name `payload` in table `probes`"
    );
}

#[test]
fn unnamed_column_loads_but_does_not_validate() {
    let mut descriptor = probes();
    descriptor.columns.push(column("", "cargo", false));

    let table = assert_ok!(Table::try_from(descriptor));
    let err = assert_err!(table.validate(), is_missing_metadata);
    assert_eq!(err.missing_metadata_kind(), Some(MissingMetadata::ColumnName));
}
