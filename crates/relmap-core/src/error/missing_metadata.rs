use super::Error;

/// The piece of table metadata that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissingMetadata {
    TypeName,
    TableName,
    TableAlias,
    Columns,
    /// A column has an empty name
    ColumnName,
    /// A column has an empty source field
    ColumnField,
    PrimaryKey,
    NonPrimaryKey,
}

/// Error when a table is not complete enough to generate queries or
/// evaluate instances.
#[derive(Debug)]
pub(super) struct MissingMetadataError {
    table: Box<str>,
    missing: MissingMetadata,
}

impl std::error::Error for MissingMetadataError {}

impl core::fmt::Display for MissingMetadataError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let table = if self.table.is_empty() {
            "<unnamed>"
        } else {
            &self.table
        };

        match self.missing {
            MissingMetadata::TypeName => write!(f, "table `{table}` has no type name"),
            MissingMetadata::TableName => f.write_str("table has no name"),
            MissingMetadata::TableAlias => write!(f, "table `{table}` has no alias"),
            MissingMetadata::Columns => write!(f, "table `{table}` has no columns"),
            MissingMetadata::ColumnName => write!(f, "table `{table}` has an unnamed column"),
            MissingMetadata::ColumnField => {
                write!(f, "table `{table}` has a column with no source field")
            }
            MissingMetadata::PrimaryKey => {
                write!(f, "table `{table}` has no primary key column")
            }
            MissingMetadata::NonPrimaryKey => {
                write!(f, "table `{table}` has no non-primary-key column")
            }
        }
    }
}

impl Error {
    pub fn missing_metadata(table: impl Into<String>, missing: MissingMetadata) -> Error {
        Error::from(super::ErrorKind::MissingMetadata(MissingMetadataError {
            table: table.into().into(),
            missing,
        }))
    }

    pub fn is_missing_metadata(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingMetadata(_))
    }

    /// Which piece of metadata was missing, if this is a missing metadata
    /// error.
    pub fn missing_metadata_kind(&self) -> Option<MissingMetadata> {
        match self.kind() {
            super::ErrorKind::MissingMetadata(err) => Some(err.missing),
            _ => None,
        }
    }
}
