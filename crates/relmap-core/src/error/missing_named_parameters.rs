use super::Error;

/// Error when argument binding finds `:name` placeholders with no value in
/// the evaluation result.
#[derive(Debug)]
pub(super) struct MissingNamedParametersError {
    names: Vec<String>,
}

impl std::error::Error for MissingNamedParametersError {}

impl core::fmt::Display for MissingNamedParametersError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "missing values for named parameters: {}",
            self.names.join(", ")
        )
    }
}

impl Error {
    pub fn missing_named_parameters(names: impl IntoIterator<Item = impl Into<String>>) -> Error {
        Error::from(super::ErrorKind::MissingNamedParameters(
            MissingNamedParametersError {
                names: names.into_iter().map(Into::into).collect(),
            },
        ))
    }

    pub fn is_missing_named_parameters(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingNamedParameters(_))
    }

    /// The unresolved parameter names, in order of first appearance.
    pub fn missing_parameter_names(&self) -> Option<&[String]> {
        match self.kind() {
            super::ErrorKind::MissingNamedParameters(err) => Some(&err.names),
            _ => None,
        }
    }
}
