use pretty_assertions::assert_eq;
use relmap_core::{
    reflect::{Accessor, CaseStrategy, Extract, Kind, Member, NameStrategy, Shape, Slot, Tag},
    reflect, Column, Reflect, Reflector, Regex, Strategy,
};
use std_util::prelude::*;

struct SpaceStation {
    id: i64,
    name: String,
    orbit: Option<f64>,
}

impl Reflect for SpaceStation {
    fn shape() -> Shape {
        Shape {
            type_name: Self::type_name(),
            ident: "SpaceStation",
            kind: Kind::Struct,
            members: vec![
                Member {
                    name: "ID",
                    ty: "i64",
                    key: false,
                    tags: vec![],
                },
                Member {
                    name: "Name",
                    ty: "String",
                    key: false,
                    tags: vec![Tag {
                        key: "db",
                        value: "station_name",
                    }],
                },
                Member {
                    name: "Orbit",
                    ty: "Option<f64>",
                    key: false,
                    tags: vec![],
                },
            ],
            accessors: vec![
                Accessor {
                    name: "Label",
                    ty: "String",
                    record: false,
                },
                Accessor {
                    name: "Dock",
                    ty: "Dock",
                    record: true,
                },
            ],
        }
    }

    fn member(&self, name: &str) -> Option<Slot> {
        match name {
            "ID" => Some(self.id.extract()),
            "Name" => Some(self.name.extract()),
            "Orbit" => Some(self.orbit.extract()),
            _ => None,
        }
    }

    fn call(&self, name: &str) -> Option<Slot> {
        match name {
            "Label" => Some(format!("{}-{}", self.name, self.id).extract()),
            "Dock" => Some(Slot::Record),
            _ => None,
        }
    }
}

struct Keyed;

impl Reflect for Keyed {
    fn shape() -> Shape {
        Shape {
            type_name: Self::type_name(),
            ident: "Keyed",
            kind: Kind::Struct,
            members: vec![
                Member {
                    name: "id",
                    ty: "i64",
                    key: false,
                    tags: vec![],
                },
                Member {
                    name: "code",
                    ty: "String",
                    key: true,
                    tags: vec![],
                },
            ],
            accessors: vec![],
        }
    }

    fn member(&self, _name: &str) -> Option<Slot> {
        None
    }
}

fn station() -> SpaceStation {
    SpaceStation {
        id: 7,
        name: "Deep Space Nine".to_string(),
        orbit: None,
    }
}

fn column_names(table: &relmap_core::Table) -> Vec<&str> {
    table.columns().map(Column::name).collect()
}

#[test]
fn default_reflection() {
    let table = assert_ok!(reflect(&station()));

    assert_eq!(table.type_name(), SpaceStation::type_name());
    assert_eq!(table.name(), "space_stations");
    assert_eq!(table.alias(), "S");
    assert_eq!(column_names(&table), ["id", "label", "name", "orbit"]);

    let id = assert_some!(table.column("id"));
    assert!(id.is_primary_key());
    assert_eq!(id.field(), "ID");
    assert_eq!(id.field_type(), "i64");

    let label = assert_some!(table.column("label"));
    assert_eq!(label.strategy(), Strategy::ComputedMember);
    assert_eq!(label.field(), "Label");

    assert_none!(table.column("dock"));
    assert_ok!(table.validate());
}

#[test]
fn reflecting_a_reference_is_the_same_as_the_value() {
    let ship = station();
    assert_eq!(assert_ok!(reflect(&&ship)), assert_ok!(reflect(&ship)));
}

#[test]
fn tag_renames_columns() {
    let table = assert_ok!(Reflector::new().tag("db").reflect_type::<SpaceStation>());
    assert_eq!(column_names(&table), ["id", "label", "orbit", "station_name"]);
    assert_eq!(assert_ok!(table.column_name("Name")), "station_name");

    let untagged = assert_ok!(Reflector::new().tag("json").reflect_type::<SpaceStation>());
    assert!(untagged.column("name").is_some());
}

#[test]
fn naming_options() {
    let table = assert_ok!(Reflector::new()
        .infer_table_name(NameStrategy::Camel, false)
        .infer_alias(CaseStrategy::Lower, 3)
        .reflect(&station()));
    assert_eq!(table.name(), "spaceStation");
    assert_eq!(table.alias(), "spa");

    let table = assert_ok!(Reflector::new()
        .table_name("stations")
        .alias("ST")
        .reflect(&station()));
    assert_eq!(table.name(), "stations");
    assert_eq!(table.alias(), "ST");
}

#[test]
fn excluded_members_never_become_columns() {
    let table = assert_ok!(Reflector::new()
        .exclude_members(["Orbit"])
        .exclude_accessors(["Label"])
        .reflect_type::<SpaceStation>());
    assert_eq!(column_names(&table), ["id", "name"]);

    // Matching the resolved column name works too
    let table = assert_ok!(Reflector::new()
        .tag("db")
        .exclude_members(["station_name"])
        .reflect_type::<SpaceStation>());
    assert_eq!(column_names(&table), ["id", "label", "orbit"]);
}

#[test]
fn exclusion_patterns() {
    let table = assert_ok!(Reflector::new()
        .exclude_member_pattern(assert_ok!(Regex::new("^(name|orbit)$")))
        .exclude_accessor_pattern(assert_ok!(Regex::new("^L")))
        .reflect_type::<SpaceStation>());
    assert_eq!(column_names(&table), ["id"]);
}

#[test]
fn explicit_key_overrides_id_column() {
    let table = assert_ok!(Reflector::new().reflect_type::<Keyed>());
    let keys: Vec<_> = table
        .primary_key_columns()
        .into_iter()
        .map(Column::name)
        .collect();
    assert_eq!(keys, ["code"]);
    assert!(!assert_some!(table.column("id")).is_primary_key());
}

#[test]
fn scalars_are_not_structures() {
    let err = assert_err!(reflect(&42_i32), is_not_a_structure);
    assert_eq!(err.to_string(), "`i32` is not a structure");

    assert_err!(Reflector::new().reflect_type::<String>(), is_not_a_structure);
}

#[test]
fn colliding_accessor_is_a_duplicate_column() {
    let mut shape = SpaceStation::shape();
    shape.accessors.push(Accessor {
        name: "name",
        ty: "String",
        record: false,
    });

    assert_err!(Reflector::new().build(&shape), is_duplicate_column_name);
}
