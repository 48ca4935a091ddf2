use super::Error;

/// Error when a graph query finds no reference between two tables.
#[derive(Debug)]
pub(super) struct MissingReferenceError {
    from: Box<str>,
    to: Box<str>,
}

impl std::error::Error for MissingReferenceError {}

impl core::fmt::Display for MissingReferenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no reference from `{}` to `{}`", self.from, self.to)
    }
}

impl Error {
    /// `from` is the child (referencing) table, `to` the parent.
    pub fn missing_reference(from: impl Into<String>, to: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingReference(MissingReferenceError {
            from: from.into().into(),
            to: to.into().into(),
        }))
    }

    pub fn is_missing_reference(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingReference(_))
    }
}
