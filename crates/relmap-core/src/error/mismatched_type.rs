use super::Error;

/// Error when an instance is evaluated against a table that was built for a
/// different type.
#[derive(Debug)]
pub(super) struct MismatchedTypeError {
    expected: Box<str>,
    actual: Box<str>,
}

impl std::error::Error for MismatchedTypeError {}

impl core::fmt::Display for MismatchedTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "mismatched type: table maps `{}`, instance is `{}`",
            self.expected, self.actual
        )
    }
}

impl Error {
    pub fn mismatched_type(expected: impl Into<String>, actual: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MismatchedType(MismatchedTypeError {
            expected: expected.into().into(),
            actual: actual.into().into(),
        }))
    }

    pub fn is_mismatched_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MismatchedType(_))
    }
}
