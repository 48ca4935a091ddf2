use std::fmt;

/// How a column's value is read from an instance.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Read a data member directly
    #[default]
    StructMember,

    /// Invoke a zero-argument accessor
    ComputedMember,
}

/// Maps one structure member (or accessor) to one table column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    /// SQL identifier of the column
    name: String,

    /// Member or accessor name on the source structure
    field: String,

    /// How the value is read
    strategy: Strategy,

    /// Semantic type of the member, e.g. `i64` or `Option<String>`
    field_type: String,

    /// True if the column is part of the table's primary key
    primary_key: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
            strategy: Strategy::StructMember,
            field_type: String::new(),
            primary_key: false,
        }
    }

    /// A struct-member column whose name and field are the same.
    pub fn member(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(name.clone(), name)
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_field_type(mut self, field_type: impl Into<String>) -> Self {
        self.field_type = field_type.into();
        self
    }

    pub fn with_primary_key(mut self, primary_key: bool) -> Self {
        self.primary_key = primary_key;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn field_type(&self) -> &str {
        &self.field_type
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_field(&mut self, field: impl Into<String>) {
        self.field = field.into();
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    pub fn set_field_type(&mut self, field_type: impl Into<String>) {
        self.field_type = field_type.into();
    }

    pub fn set_primary_key(&mut self, primary_key: bool) {
        self.primary_key = primary_key;
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <- {}", self.name, self.field)?;
        if self.primary_key {
            f.write_str(" (pk)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_and_equality() {
        let a = Column::new("ship_name", "name")
            .with_field_type("String")
            .with_primary_key(false);
        let mut b = Column::new("ship_name", "name");
        b.set_field_type("String");

        assert_eq!(a, b);
        assert_eq!(a.strategy(), Strategy::StructMember);

        b.set_strategy(Strategy::ComputedMember);
        assert_ne!(a, b);
    }

    #[test]
    fn display() {
        let id = Column::member("id").with_primary_key(true);
        assert_eq!(id.to_string(), "id <- id (pk)");
    }
}
