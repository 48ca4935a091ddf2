use crate::{
    reflect::{Reflect, Slot},
    Error, Result, Strategy, Table, Value,
};

use indexmap::IndexMap;

/// Column values read from one instance, keyed by column name.
///
/// Entries follow the table's column order. Columns whose member could not
/// be read, or that hold a nested structure, have no entry.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    values: IndexMap<String, Value>,
}

impl Evaluation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    /// True if `column` was read and is null. Columns with no entry are not
    /// null.
    pub fn is_null(&self, column: &str) -> bool {
        self.values.get(column).is_some_and(Value::is_null)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Names of the columns read as null.
    pub fn null_columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter()
            .filter(|(_, value)| value.is_null())
            .map(|(name, _)| name)
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(column.into(), value.into());
    }
}

impl FromIterator<(String, Value)> for Evaluation {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Table {
    /// Reads every column of `instance`.
    ///
    /// Fails if `instance` is not of the type the table was built for, or if
    /// the table is not valid. Members the instance does not expose are
    /// left out of the result rather than reported.
    pub fn evaluate<T: Reflect>(&self, instance: &T) -> Result<Evaluation> {
        let type_name = T::type_name();
        if type_name != self.type_name() {
            return Err(Error::mismatched_type(self.type_name(), type_name));
        }

        self.validate()?;

        let mut evaluation = Evaluation::new();

        for column in self.columns() {
            let slot = match column.strategy() {
                Strategy::StructMember => instance.member(column.field()),
                Strategy::ComputedMember => instance.call(column.field()),
            };

            match slot {
                Some(Slot::Value(value)) => {
                    tracing::trace!(
                        column = column.name(),
                        kind = value.variant_name(),
                        value = %value,
                        "extracted"
                    );
                    evaluation.insert(column.name(), value);
                }
                Some(Slot::Record) => {
                    tracing::trace!(column = column.name(), "skipping nested structure");
                }
                None => {
                    tracing::trace!(
                        column = column.name(),
                        field = column.field(),
                        "member not found; omitted"
                    );
                }
            }
        }

        Ok(evaluation)
    }
}
