//! Data model for a schema snapshot.

use std::{fs, path::Path, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{Error, Result};

/// A full schema snapshot: the read-only input driving generation.
///
/// Collection order is preserved from the source document; generation
/// iterates in that order. Missing sections deserialize as empty, and the
/// snapshot is never validated for consistency — a foreign key naming an
/// unknown table is kept as-is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaDescription {
    #[serde(default)]
    pub tables: Vec<Table>,
    #[serde(default)]
    pub enums: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKey>,
}

/// One table and its columns, in declared order.
#[derive(Debug, Clone, Deserialize)]
pub struct Table {
    pub table_name: String,
    #[serde(default)]
    pub columns: Vec<Column>,
}

/// A single column. The declared type is opaque and passed through verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub nullable: bool,
}

/// A foreign-key edge. Composite keys carry several column names per side.
#[derive(Debug, Clone, Deserialize)]
pub struct ForeignKey {
    pub from_table: String,
    pub from_column: Vec<String>,
    pub to_table: String,
    pub to_column: Vec<String>,
}

impl ForeignKey {
    /// True when exactly one column participates on the referencing side.
    pub fn is_single_column(&self) -> bool {
        self.from_column.len() == 1
    }
}

impl SchemaDescription {
    /// Read and parse a snapshot from a file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
        Self::parse(&src, &path.display().to_string())
    }

    /// Parse a snapshot, attributing errors to `filename`.
    pub fn parse(src: &str, filename: &str) -> Result<Self> {
        serde_json::from_str(src).map_err(|source| Error::parse(source, src, filename))
    }
}

impl FromStr for SchemaDescription {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, "<schema>")
    }
}
