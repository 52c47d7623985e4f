use super::MappingKind;
use crate::{Error, Result};

use std::{fmt, str::FromStr};

/// Resource ID of an ingestion mapping.
///
/// Rendered as `{endpoint}|{database}|{table}|{kind}|{name}` with the kind
/// lowercased. None of the segments may contain `|`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MappingId {
    pub endpoint: String,
    pub database: String,
    pub table: String,
    pub kind: MappingKind,
    pub name: String,
}

const DELIMITER: char = '|';
const SEGMENTS: usize = 5;

impl MappingId {
    /// Separates the segments of a rendered ID.
    pub const DELIMITER: char = DELIMITER;

    pub fn new(
        endpoint: impl Into<String>,
        database: impl Into<String>,
        table: impl Into<String>,
        kind: MappingKind,
        name: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            database: database.into(),
            table: table.into(),
            kind,
            name: name.into(),
        }
    }
}

impl fmt::Display for MappingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{}",
            self.endpoint,
            self.database,
            self.table,
            self.kind.as_command_str(),
            self.name
        )
    }
}

impl FromStr for MappingId {
    type Err = Error;

    fn from_str(id: &str) -> Result<Self> {
        let segments: Vec<&str> = id.split(DELIMITER).collect();

        let &[endpoint, database, table, kind, name] = segments.as_slice() else {
            return Err(Error::invalid_id(
                id,
                format!(
                    "expected {SEGMENTS} segments delimited by `{DELIMITER}`, found {}",
                    segments.len()
                ),
            ));
        };

        let kind = kind
            .parse()
            .map_err(|err: Error| err.context(Error::invalid_id(id, "unsupported mapping kind")))?;

        Ok(MappingId::new(endpoint, database, table, kind, name))
    }
}
