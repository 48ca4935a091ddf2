#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Period};

mod ident;
use ident::Ident;

mod params;
use params::Param;

// Fragment serializers
mod statement;

use crate::{Options, Statement};

use relmap_core::{bail, Evaluation, Result};

/// Serialize a statement to a SQL string
#[derive(Debug, Clone, Default)]
pub struct Serializer {
    options: Options,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    pub fn new(options: Options) -> Serializer {
        Serializer { options }
    }

    pub fn mysql() -> Serializer {
        Serializer::new(Options::mysql())
    }

    pub fn sqlite() -> Serializer {
        Serializer::new(Options::sqlite())
    }

    pub fn postgresql() -> Serializer {
        Serializer::new(Options::postgresql())
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Renders `stmt`, terminated with `;`.
    ///
    /// With `omit_empty` set and an evaluation at hand, update columns that
    /// evaluated to null are left out of the SET clause.
    pub fn serialize(&self, stmt: &Statement<'_>, values: Option<&Evaluation>) -> Result<String> {
        let mut stmt = stmt.clone();

        if let (true, Some(values)) = (self.options.omit_empty, values) {
            stmt.rest.retain(|column| !values.is_null(column.name()));

            if stmt.is_update() && stmt.rest.is_empty() {
                bail!(
                    "every non-key column of `{}` is null; nothing to update",
                    stmt.table.name()
                );
            }
        }

        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');

        tracing::debug!(
            table = stmt.table.name(),
            kind = ?stmt.kind,
            sql = %ret,
            "rendered statement"
        );

        Ok(ret)
    }
}
