mod bind;
pub use bind::bind;

mod options;
pub use options::Options;

mod query;
pub use query::{Mutations, Queries, Scoped};

pub mod serializer;
pub use serializer::Serializer;

pub mod stmt;
pub use stmt::{Statement, StatementKind};
