use pretty_assertions::assert_eq;
use relmap_core::{Column, MissingMetadata, Strategy, Table};
use std_util::prelude::*;

fn starships() -> Table {
    let mut table = Table::new("fleet::Starship", "starships", "S");
    assert_ok!(table.add_columns([
        Column::member("speed").with_field_type("i32"),
        Column::member("id").with_field_type("i64").with_primary_key(true),
        Column::new("ship_name", "name").with_field_type("String"),
    ]));
    table
}

fn names<'a>(columns: impl IntoIterator<Item = &'a Column>) -> Vec<&'a str> {
    columns.into_iter().map(Column::name).collect()
}

#[test]
fn columns_are_sorted_by_name() {
    let table = starships();
    assert_eq!(names(table.columns()), ["id", "ship_name", "speed"]);
}

#[test]
fn primary_key_partition() {
    let table = starships();
    assert_eq!(names(table.primary_key_columns()), ["id"]);
    assert_eq!(names(table.non_primary_key_columns()), ["ship_name", "speed"]);
}

#[test]
fn find_columns_by_predicate() {
    let table = starships();
    let typed = table.find_columns(|c| c.field_type().starts_with('i'));
    assert_eq!(names(typed), ["id", "speed"]);

    let first = assert_some!(table.find_column(|c| !c.is_primary_key()));
    assert_eq!(first.name(), "ship_name");
    assert_none!(table.find_column(|c| c.strategy() == Strategy::ComputedMember));
}

#[test]
fn bidirectional_lookup() {
    let table = starships();
    assert_eq!(assert_ok!(table.column_name("name")), "ship_name");
    assert_eq!(assert_ok!(table.field_name("ship_name")), "name");

    let err = assert_err!(table.column_name("ship_name"), is_no_mapping);
    assert_eq!(
        err.to_string(),
        "no mapping for field `ship_name` in table `starships`"
    );
    assert_err!(table.field_name("name"), is_no_mapping);
}

#[test]
fn duplicate_name_is_rejected() {
    let mut table = starships();
    let err = assert_err!(
        table.add_column(Column::new("speed", "warp")),
        is_duplicate_column_name
    );
    assert_eq!(
        err.to_string(),
        "duplicate column name `speed` in table `starships`"
    );
    assert_none!(table.column_by_field("warp"));
}

#[test]
fn duplicate_field_is_rejected() {
    let mut table = starships();
    assert_err!(
        table.add_column(Column::new("velocity", "speed")),
        is_duplicate_column_field
    );
    assert_none!(table.column("velocity"));
    assert_eq!(table.column_count(), 3);
}

#[test]
fn add_columns_keeps_prefix_before_conflict() {
    let mut table = Table::new("fleet::Starship", "starships", "S");
    let a = Column::member("a");
    let a_again = Column::new("a", "other");

    assert_err!(table.add_columns([a.clone(), a_again]), is_duplicate_column_name);
    assert_eq!(table.columns().cloned().collect::<Vec<_>>(), vec![a]);
}

#[test]
fn validate_reports_first_missing_piece() {
    let cases = [
        (Table::new("", "t", "T"), MissingMetadata::TypeName),
        (Table::new("m::T", "", "T"), MissingMetadata::TableName),
        (Table::new("m::T", "t", ""), MissingMetadata::TableAlias),
        (Table::new("m::T", "t", "T"), MissingMetadata::Columns),
    ];

    for (table, expected) in cases {
        let err = assert_err!(table.validate(), is_missing_metadata);
        assert_eq!(err.missing_metadata_kind(), Some(expected));
        assert!(!table.is_valid());
    }

    let mut unnamed = starships();
    assert_ok!(unnamed.add_column(Column::new("", "")));
    let err = assert_err!(unnamed.validate(), is_missing_metadata);
    assert_eq!(err.missing_metadata_kind(), Some(MissingMetadata::ColumnName));
    assert_eq!(err.to_string(), "table `starships` has an unnamed column");

    let mut fieldless = starships();
    assert_ok!(fieldless.add_column(Column::new("warp_factor", "")));
    let err = assert_err!(fieldless.validate(), is_missing_metadata);
    assert_eq!(
        err.missing_metadata_kind(),
        Some(MissingMetadata::ColumnField)
    );

    let mut no_pk = Table::new("m::T", "t", "T");
    assert_ok!(no_pk.add_column(Column::member("name")));
    let err = assert_err!(no_pk.validate());
    assert_eq!(err.missing_metadata_kind(), Some(MissingMetadata::PrimaryKey));

    let mut only_pk = Table::new("m::T", "t", "T");
    assert_ok!(only_pk.add_column(Column::member("id").with_primary_key(true)));
    let err = assert_err!(only_pk.validate());
    assert_eq!(
        err.missing_metadata_kind(),
        Some(MissingMetadata::NonPrimaryKey)
    );
    assert_eq!(err.to_string(), "table `t` has no non-primary-key column");

    assert_ok!(starships().validate());
}

#[test]
fn equality_ignores_insertion_order_and_alias() {
    let mut other = Table::new("fleet::Starship", "starships", "SS");
    assert_ok!(other.add_columns([
        Column::new("ship_name", "name").with_field_type("String"),
        Column::member("id").with_field_type("i64").with_primary_key(true),
        Column::member("speed").with_field_type("i32"),
    ]));

    assert_eq!(starships(), other);

    other.set_name("ships");
    assert!(starships() != other);
}

#[test]
fn setters_update_metadata() {
    let mut table = Table::new("", "", "");
    table.set_type_name("fleet::Shuttle");
    table.set_name("shuttles");
    table.set_alias("SH");

    assert_eq!(table.type_name(), "fleet::Shuttle");
    assert_eq!(table.name(), "shuttles");
    assert_eq!(table.alias(), "SH");
    assert!(table.id().is_placeholder());
    assert!(table.references().is_empty());
}
