use pretty_assertions::assert_eq;
use relmap_core::{
    reflect::{Extract, Kind, Member, Shape, Slot},
    Column, Reflect, Reflector, Schema, Table, Value,
};
use relmap_sql::{Mutations, Options, Queries, Scoped};
use std_util::prelude::*;

struct Ship {
    id: i64,
    fleet_id: i64,
    name: String,
    speed: Option<i32>,
}

fn member(name: &'static str, ty: &'static str) -> Member {
    Member {
        name,
        ty,
        key: false,
        tags: vec![],
    }
}

impl Reflect for Ship {
    fn shape() -> Shape {
        Shape {
            type_name: Self::type_name(),
            ident: "Ship",
            kind: Kind::Struct,
            members: vec![
                member("id", "i64"),
                member("fleet_id", "i64"),
                member("name", "String"),
                member("speed", "Option<i32>"),
            ],
            accessors: vec![],
        }
    }

    fn member(&self, name: &str) -> Option<Slot> {
        match name {
            "id" => Some(self.id.extract()),
            "fleet_id" => Some(self.fleet_id.extract()),
            "name" => Some(self.name.extract()),
            "speed" => Some(self.speed.extract()),
            _ => None,
        }
    }
}

struct Fleet {
    id: i64,
}

impl Reflect for Fleet {
    fn shape() -> Shape {
        Shape {
            type_name: Self::type_name(),
            ident: "Fleet",
            kind: Kind::Struct,
            members: vec![member("id", "i64"), member("admiral", "String")],
            accessors: vec![],
        }
    }

    fn member(&self, name: &str) -> Option<Slot> {
        match name {
            "id" => Some(self.id.extract()),
            _ => None,
        }
    }
}

fn ship() -> Ship {
    Ship {
        id: 1701,
        fleet_id: 7,
        name: "Enterprise".to_string(),
        speed: Some(9),
    }
}

fn ships() -> Table {
    assert_ok!(Reflector::new().reflect_type::<Ship>())
}

#[test]
fn update_arguments_follow_placeholders() {
    let (sql, args) = assert_ok!(ships().update_query_with_args(&ship(), &Options::new()));

    assert_eq!(
        sql,
        "UPDATE ships SET fleet_id = ?, name = ?, speed = ? WHERE 1=1 AND id = ?;"
    );
    assert_eq!(
        args,
        [
            Value::I64(7),
            Value::from("Enterprise"),
            Value::I64(9),
            Value::I64(1701)
        ]
    );
}

#[test]
fn ordered_placeholders_strictly_increase() {
    let (sql, args) = assert_ok!(ships().insert_query_with_args(&ship(), &Options::postgresql()));

    assert_eq!(
        sql,
        "INSERT INTO ships (fleet_id, id, name, speed) VALUES ($1, $2, $3, $4);"
    );
    assert_eq!(args.len(), 4);

    let (sql, _) = assert_ok!(ships().select_query_with_args(&ship(), &Options::sqlite()));
    assert_eq!(
        sql,
        "SELECT fleet_id, id, name, speed FROM ships AS S WHERE 1=1 AND S.id = ?1;"
    );
}

#[test]
fn column_names_sharing_a_prefix_bind_their_own_values() {
    let mut table = Table::new(Ship::type_name(), "ships", "S");
    assert_ok!(table.add_columns([
        Column::member("id").with_primary_key(true),
        Column::member("speed"),
        Column::new("speed$unit", "fleet_id"),
    ]));

    let (sql, args) = assert_ok!(table.update_query_with_args(&ship(), &Options::new()));
    assert_eq!(
        sql,
        "UPDATE ships SET speed = ?, speed$unit = ? WHERE 1=1 AND id = ?;"
    );
    assert_eq!(args, [Value::I64(9), Value::I64(7), Value::I64(1701)]);

    let (sql, _) = assert_ok!(table.update_query_with_args(&ship(), &Options::postgresql()));
    assert_eq!(
        sql,
        "UPDATE ships SET speed = $1, speed$unit = $2 WHERE 1=1 AND id = $3;"
    );
}

#[test]
fn named_option_is_ignored_when_binding() {
    let options = Options::new().named(true);
    let (sql, args) = assert_ok!(ships().delete_query_with_args(&ship(), &options));
    assert_eq!(sql, "DELETE FROM ships WHERE 1=1 AND id = ?;");
    assert_eq!(args, [Value::I64(1701)]);
}

#[test]
fn plain_queries() {
    let table = ships();
    assert_eq!(
        assert_ok!(table.select_query(&Options::new())),
        "SELECT fleet_id, id, name, speed FROM ships AS S WHERE 1=1 AND S.id = ?;"
    );
    assert_eq!(
        assert_ok!(table.insert_query(&Options::new().named(true))),
        "INSERT INTO ships (fleet_id, id, name, speed) VALUES (:fleet_id, :id, :name, :speed);"
    );
    assert_eq!(
        assert_ok!(table.update_query(&Options::new().placeholder("@p"))),
        "UPDATE ships SET fleet_id = @p, name = @p, speed = @p WHERE 1=1 AND id = @p;"
    );
    assert_eq!(
        assert_ok!(table.delete_query(&Options::new())),
        "DELETE FROM ships WHERE 1=1 AND id = ?;"
    );
}

#[test]
fn omit_empty_skips_null_columns() {
    let mut docked = ship();
    docked.speed = None;

    let (sql, args) = assert_ok!(
        ships().update_query_with_args(&docked, &Options::postgresql().omit_empty(true))
    );
    assert_eq!(
        sql,
        "UPDATE ships SET fleet_id = $1, name = $2 WHERE 1=1 AND id = $3;"
    );
    assert_eq!(args.len(), 3);

    let (sql, args) = assert_ok!(ships().update_query_with_args(&docked, &Options::new()));
    assert_eq!(
        sql,
        "UPDATE ships SET fleet_id = ?, name = ?, speed = ? WHERE 1=1 AND id = ?;"
    );
    assert_eq!(args[2], Value::Null);
}

#[test]
fn binding_another_type_fails() {
    let fleet = Fleet { id: 7 };
    assert_err!(
        ships().update_query_with_args(&fleet, &Options::new()),
        is_mismatched_type
    );
}

#[test]
fn unreadable_columns_are_missing_parameters() {
    let fleets = assert_ok!(Reflector::new().reflect_type::<Fleet>());
    let fleet = Fleet { id: 7 };

    let err = assert_err!(
        fleets.update_query_with_args(&fleet, &Options::new()),
        is_missing_named_parameters
    );
    assert_eq!(
        err.to_string(),
        "missing values for named parameters: admiral"
    );

    // Reading only the key works
    let (sql, args) = assert_ok!(fleets.delete_query_with_args(&fleet, &Options::new()));
    assert_eq!(sql, "DELETE FROM fleets WHERE 1=1 AND id = ?;");
    assert_eq!(args, [Value::I64(7)]);
}

#[test]
fn scoped_queries() {
    let mut schema = Schema::new();
    let fleets = schema.add(assert_ok!(Reflector::new().reflect_type::<Fleet>()));
    let ships = schema.add(ships());
    assert_ok!(schema.references(ships, fleets, ["fleet_id"]));

    let scoped = assert_ok!(Scoped::between(&schema, ships, fleets));
    assert_eq!(assert_ok!(scoped.child()).name(), "ships");

    assert_eq!(
        assert_ok!(scoped.select_query(&Options::new())),
        "SELECT fleet_id, id, name, speed FROM ships AS S WHERE 1=1 AND S.fleet_id = ?;"
    );

    let (sql, args) = assert_ok!(scoped.delete_query_with_args(&ship(), &Options::postgresql()));
    assert_eq!(sql, "DELETE FROM ships WHERE 1=1 AND fleet_id = $1;");
    assert_eq!(args, [Value::I64(7)]);

    assert_err!(Scoped::between(&schema, fleets, ships), is_missing_reference);
}
