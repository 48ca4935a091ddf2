use super::Error;

/// The side of a column/field lookup that had no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unmapped {
    /// No column maps the requested source field.
    Field,
    /// No column has the requested name.
    Column,
}

#[derive(Debug)]
pub(super) struct NoMappingError {
    table: Box<str>,
    unmapped: Unmapped,
    key: Box<str>,
}

impl std::error::Error for NoMappingError {}

impl core::fmt::Display for NoMappingError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.unmapped {
            Unmapped::Field => write!(
                f,
                "no mapping for field `{}` in table `{}`",
                self.key, self.table
            ),
            Unmapped::Column => write!(
                f,
                "no mapping for column `{}` in table `{}`",
                self.key, self.table
            ),
        }
    }
}

impl Error {
    pub fn no_mapping(
        table: impl Into<String>,
        unmapped: Unmapped,
        key: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::NoMapping(NoMappingError {
            table: table.into().into(),
            unmapped,
            key: key.into().into(),
        }))
    }

    pub fn is_no_mapping(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoMapping(_))
    }
}
