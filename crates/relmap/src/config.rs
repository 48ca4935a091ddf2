//! Loading table metadata from configuration files.
//!
//! A file holds a list of table descriptors under a `tables` key:
//!
//! ```toml
//! [[tables]]
//! typeName = "fleet::Starship"
//! name = "starships"
//! alias = "S"
//!
//! [[tables.columns]]
//! name = "id"
//! field = "id"
//! primaryKey = true
//! ```
//!
//! Which parser handles a file is decided by its extension, through an
//! explicit [`Loaders`] map.

use crate::{err, Result, Schema, Table};

use anyhow::Context;
use indexmap::IndexMap;
use relmap_core::schema::descriptor::TableDescriptor;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

/// Maps file extensions to formats.
///
/// `Loaders::default()` knows `json` and `toml`. Extensions are matched
/// without the leading dot and case-insensitively.
#[derive(Debug, Clone)]
pub struct Loaders {
    formats: IndexMap<String, Format>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    #[serde(default)]
    tables: Vec<TableDescriptor>,
}

impl Format {
    /// Parses the table descriptors in `src`.
    pub fn parse(self, src: &str) -> Result<Vec<TableDescriptor>> {
        let document: Document = match self {
            Format::Json => serde_json::from_str(src).context("parsing JSON table descriptors")?,
            Format::Toml => toml::from_str(src).context("parsing TOML table descriptors")?,
        };

        Ok(document.tables)
    }

    /// Renders `tables` in this format.
    pub fn render(self, tables: &[TableDescriptor]) -> Result<String> {
        let document = Document {
            tables: tables.to_vec(),
        };

        let rendered = match self {
            Format::Json => serde_json::to_string_pretty(&document)
                .context("rendering JSON table descriptors")?,
            Format::Toml => {
                toml::to_string(&document).context("rendering TOML table descriptors")?
            }
        };

        Ok(rendered)
    }
}

impl Default for Loaders {
    fn default() -> Self {
        let mut loaders = Loaders::empty();
        loaders.register("json", Format::Json);
        loaders.register("toml", Format::Toml);
        loaders
    }
}

impl Loaders {
    /// A map with no registered extensions.
    pub fn empty() -> Loaders {
        Loaders {
            formats: IndexMap::new(),
        }
    }

    /// Parse files ending in `extension` as `format`, replacing any earlier
    /// registration.
    pub fn register(&mut self, extension: impl AsRef<str>, format: Format) -> &mut Self {
        self.formats.insert(normalize(extension.as_ref()), format);
        self
    }

    pub fn format(&self, extension: &str) -> Option<Format> {
        self.formats.get(&normalize(extension)).copied()
    }

    pub fn extensions(&self) -> impl Iterator<Item = &str> + '_ {
        self.formats.keys().map(String::as_str)
    }

    /// Parses `src` with the format registered for `extension` and builds a
    /// table per descriptor.
    pub fn load_str(&self, extension: &str, src: &str) -> Result<Vec<Table>> {
        let format = self
            .format(extension)
            .ok_or_else(|| err!("no loader registered for extension `{extension}`"))?;

        let tables = format
            .parse(src)?
            .into_iter()
            .map(Table::try_from)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(?format, tables = tables.len(), "loaded table descriptors");

        Ok(tables)
    }

    /// Reads and loads the file at `path`, picking the format by extension.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Vec<Table>> {
        let path = path.as_ref();

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| err!("`{}` has no file extension", path.display()))?;

        let src = std::fs::read_to_string(path)
            .with_context(|| format!("reading `{}`", path.display()))?;

        self.load_str(extension, &src)
            .map_err(|e| e.context(err!("loading `{}`", path.display())))
    }

    /// Loads `path` into a new schema.
    pub fn load_schema(&self, path: impl AsRef<Path>) -> Result<Schema> {
        let mut schema = Schema::new();
        for table in self.load_path(path)? {
            schema.add(table);
        }
        Ok(schema)
    }
}

fn normalize(extension: &str) -> String {
    extension.trim_start_matches('.').to_ascii_lowercase()
}
