//! Structural descriptors and the introspection engine.
//!
//! A type describes its own shape by implementing [`Reflect`], usually
//! through `#[derive(Reflect)]`. [`Reflector`] turns a shape into a
//! [`Table`](crate::Table).

mod extract;
pub use extract::Extract;

mod reflector;
pub use reflector::{CaseStrategy, NameStrategy, Reflector};

use crate::{Result, Table, Value};

/// Structural description of a type, plus read access to its members.
pub trait Reflect {
    /// Fully-qualified identity of the type. Tables record it so evaluation
    /// can reject instances of another type.
    fn type_name() -> &'static str
    where
        Self: Sized,
    {
        std::any::type_name::<Self>()
    }

    /// Members and accessors of the type.
    fn shape() -> Shape
    where
        Self: Sized;

    /// Reads the data member called `name`. `None` if there is no such
    /// member.
    fn member(&self, name: &str) -> Option<Slot>;

    /// Invokes the zero-argument accessor called `name`. `None` if there is
    /// no such accessor.
    fn call(&self, name: &str) -> Option<Slot> {
        let _ = name;
        None
    }
}

/// Zero-argument accessors of a type, generated by `#[relmap::accessors]`
/// on an `impl` block.
pub trait Accessors {
    /// Accessors in declaration order.
    fn accessors() -> Vec<Accessor>
    where
        Self: Sized;

    /// Invokes the accessor called `name`.
    fn invoke(&self, name: &str) -> Option<Slot>;
}

/// What reading a member or accessor produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    /// A plain value, including `Value::Null` for an absent optional.
    Value(Value),

    /// A nested structure. Nested structures are not flattened into the
    /// parent's columns.
    Record,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// See [`Reflect::type_name`]
    pub type_name: &'static str,

    /// Short type name, e.g. `Starship`
    pub ident: &'static str,

    pub kind: Kind,

    /// Data members, in declaration order
    pub members: Vec<Member>,

    /// Zero-argument accessors, in declaration order
    pub accessors: Vec<Accessor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A struct with named fields
    Struct,
    Tuple,
    Unit,
    Enum,
    /// A primitive such as an integer or a string
    Scalar,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub name: &'static str,

    /// Rust type of the member as written, e.g. `Option<String>`
    pub ty: &'static str,

    /// Annotated with `#[key]`
    pub key: bool,

    pub tags: Vec<Tag>,
}

/// A `key = "value"` annotation on a member, e.g. `#[tag(db = "ship_name")]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub key: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Accessor {
    pub name: &'static str,

    /// Rust return type as written
    pub ty: &'static str,

    /// The accessor returns a nested structure by value
    pub record: bool,
}

impl Shape {
    /// The shape of a type that has no members, e.g. a scalar or an enum.
    pub fn opaque(type_name: &'static str, ident: &'static str, kind: Kind) -> Shape {
        Shape {
            type_name,
            ident,
            kind,
            members: vec![],
            accessors: vec![],
        }
    }

    pub fn is_struct(&self) -> bool {
        self.kind == Kind::Struct
    }

    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|member| member.name == name)
    }
}

impl Member {
    pub fn tag(&self, key: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|tag| tag.key == key)
            .map(|tag| tag.value)
    }
}

/// References reflect as the referenced type.
impl<T: Reflect> Reflect for &T {
    fn type_name() -> &'static str {
        T::type_name()
    }

    fn shape() -> Shape {
        T::shape()
    }

    fn member(&self, name: &str) -> Option<Slot> {
        (**self).member(name)
    }

    fn call(&self, name: &str) -> Option<Slot> {
        (**self).call(name)
    }
}

macro_rules! impl_reflect_scalar {
    ( $($t:ty),+ ) => {
        $(
            impl Reflect for $t {
                fn shape() -> Shape {
                    Shape::opaque(Self::type_name(), stringify!($t), Kind::Scalar)
                }

                fn member(&self, _name: &str) -> Option<Slot> {
                    None
                }
            }
        )+
    };
}

impl_reflect_scalar!(
    bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, char, String
);

/// Builds a table from `instance`'s type using the default naming rules.
pub fn reflect<T: Reflect>(instance: &T) -> Result<Table> {
    Reflector::new().reflect(instance)
}
