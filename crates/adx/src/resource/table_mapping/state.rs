use adx_core::{Error, MappingEntry, MappingId, Result, TableMapping};

use serde::Serialize;

/// Observed state of an ingestion mapping, written back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableMappingState {
    pub id: String,
    pub name: String,
    pub database_name: String,
    pub table_name: String,

    /// Display spelling, `Json`
    pub kind: String,

    pub mapping: Vec<MappingEntry>,
    pub last_updated_on: Option<String>,
}

impl TableMappingState {
    /// Builds state from a `.show` row.
    ///
    /// Only the ID is carried over from the request. Every other attribute is
    /// taken from the row, so remote renames show up as drift.
    pub(super) fn from_remote(id: &MappingId, remote: TableMapping) -> Result<Self> {
        let mapping = remote.entries()?;

        Ok(Self {
            id: id.to_string(),
            name: remote.name,
            database_name: remote.database,
            table_name: remote.table,
            kind: remote.kind.to_string(),
            mapping,
            last_updated_on: remote.last_updated_on,
        })
    }

    /// Renders the state as an attribute bag.
    pub fn to_attributes(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|err| Error::from(anyhow::Error::from(err)))
    }
}
