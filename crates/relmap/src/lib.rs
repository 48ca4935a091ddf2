pub mod config;
pub use config::{Format, Loaders};

pub use relmap_core::{
    bail, err,
    eval::{self, Evaluation},
    reflect,
    reflect::{CaseStrategy, NameStrategy, Reflector},
    schema::{self, Column, Reference, Schema, Strategy, Table, TableId},
    value::{self, Value},
    Error, Reflect, Regex, Result,
};

pub use relmap_sql::{
    bind, serializer, stmt, Mutations, Options, Queries, Scoped, Serializer, Statement,
    StatementKind,
};

pub use relmap_macros::{accessors, Reflect};

#[doc(hidden)]
pub mod codegen_support {
    pub use relmap_core::reflect::{
        Accessor, Accessors, Extract, Kind, Member, Reflect, Shape, Slot, Tag,
    };
}
