use super::{flatten, MappingEntry, MappingKind};
use crate::Result;

use serde::{Deserialize, Serialize};

/// An ingestion mapping as listed by `.show table ... ingestion ... mapping`.
///
/// One value per row of the command result; fields bind to columns by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TableMapping {
    pub name: String,
    pub kind: MappingKind,

    /// Raw mapping JSON, an array of column mapping objects
    pub mapping: String,

    /// Server timestamp of the last create or alter
    #[serde(default)]
    pub last_updated_on: Option<String>,

    pub database: String,
    pub table: String,
}

impl TableMapping {
    /// Decodes the mapping payload into entries.
    pub fn entries(&self) -> Result<Vec<MappingEntry>> {
        flatten(&self.mapping)
    }
}
