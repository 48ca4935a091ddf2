mod error;
pub use error::{DuplicateOf, Error, IntoError, MissingMetadata, Unmapped};

pub mod eval;
pub use eval::Evaluation;

pub mod reflect;
pub use reflect::{reflect, Reflect, Reflector};

pub mod schema;
pub use schema::{Column, Reference, Schema, Strategy, Table, TableId};

pub mod value;
pub use value::Value;

/// A Result type alias that uses relmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use regex::Regex;
