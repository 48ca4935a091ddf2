use super::Error;

/// Which index a rejected column collided in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateOf {
    Name,
    Field,
}

/// Error when a column is added to a table that already maps the same
/// column name or source field.
#[derive(Debug)]
pub(super) struct DuplicateColumnError {
    table: Box<str>,
    of: DuplicateOf,
    value: Box<str>,
}

impl std::error::Error for DuplicateColumnError {}

impl core::fmt::Display for DuplicateColumnError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let what = match self.of {
            DuplicateOf::Name => "name",
            DuplicateOf::Field => "field",
        };
        write!(
            f,
            "duplicate column {what} `{}` in table `{}`",
            self.value, self.table
        )
    }
}

impl Error {
    pub fn duplicate_column(
        table: impl Into<String>,
        of: DuplicateOf,
        value: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::DuplicateColumn(DuplicateColumnError {
            table: table.into().into(),
            of,
            value: value.into().into(),
        }))
    }

    pub fn is_duplicate_column_name(&self) -> bool {
        matches!(
            self.kind(),
            super::ErrorKind::DuplicateColumn(DuplicateColumnError {
                of: DuplicateOf::Name,
                ..
            })
        )
    }

    pub fn is_duplicate_column_field(&self) -> bool {
        matches!(
            self.kind(),
            super::ErrorKind::DuplicateColumn(DuplicateColumnError {
                of: DuplicateOf::Field,
                ..
            })
        )
    }
}
