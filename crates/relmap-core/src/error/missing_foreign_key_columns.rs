use super::Error;

/// Error when a reference cites key columns the child table does not have.
#[derive(Debug)]
pub(super) struct MissingForeignKeyColumnsError {
    child: Box<str>,
    columns: Vec<String>,
}

impl std::error::Error for MissingForeignKeyColumnsError {}

impl core::fmt::Display for MissingForeignKeyColumnsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.columns.is_empty() {
            return write!(f, "no foreign key columns given for `{}`", self.child);
        }

        write!(
            f,
            "missing foreign key columns on `{}`: {}",
            self.child,
            self.columns.join(", ")
        )
    }
}

impl Error {
    pub fn missing_foreign_key_columns(
        child: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Error {
        Error::from(super::ErrorKind::MissingForeignKeyColumns(
            MissingForeignKeyColumnsError {
                child: child.into().into(),
                columns: columns.into_iter().map(Into::into).collect(),
            },
        ))
    }

    pub fn is_missing_foreign_key_columns(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingForeignKeyColumns(_))
    }
}
