use super::Error;

/// Error when introspection is asked to build a table from a value that is
/// not record-shaped (a scalar, an enum, a tuple struct, ...).
#[derive(Debug)]
pub(super) struct NotAStructureError {
    type_name: Box<str>,
}

impl std::error::Error for NotAStructureError {}

impl core::fmt::Display for NotAStructureError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "`{}` is not a structure", self.type_name)
    }
}

impl Error {
    pub fn not_a_structure(type_name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NotAStructure(NotAStructureError {
            type_name: type_name.into().into(),
        }))
    }

    pub fn is_not_a_structure(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NotAStructure(_))
    }
}
