use crate::{Error, Result};

use serde::{Deserialize, Serialize};

/// One column of an ingestion mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    /// Target column in the table
    pub column: String,

    /// JSONPath locating the value in the ingested document
    pub path: String,

    /// Kusto type name of the column
    pub datatype: String,

    /// Ingestion-time transform, empty when none
    #[serde(default)]
    pub transform: String,
}

impl MappingEntry {
    pub fn new(
        column: impl Into<String>,
        path: impl Into<String>,
        datatype: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            path: path.into(),
            datatype: datatype.into(),
            transform: String::new(),
        }
    }

    pub fn with_transform(mut self, transform: impl Into<String>) -> Self {
        self.transform = transform.into();
        self
    }
}

/// Mapping entry as sent in a `.create-or-alter` command.
///
/// Field order is the order keys are written. An empty transform is left out.
#[derive(Debug, Serialize)]
struct CommandEntry<'a> {
    column: &'a str,
    path: &'a str,
    datatype: &'a str,

    #[serde(skip_serializing_if = "str::is_empty")]
    transform: &'a str,
}

impl<'a> From<&'a MappingEntry> for CommandEntry<'a> {
    fn from(entry: &'a MappingEntry) -> Self {
        CommandEntry {
            column: &entry.column,
            path: &entry.path,
            datatype: &entry.datatype,
            transform: &entry.transform,
        }
    }
}

/// Mapping entry as stored by the cluster.
///
/// Older clusters echo back the lowercase keys the mapping was created with.
/// Newer ones normalize to `Column`/`DataType` and move the path and transform
/// into a `Properties` bag.
#[derive(Debug, Deserialize)]
struct StoredEntry {
    #[serde(alias = "Column")]
    column: String,

    #[serde(alias = "Path")]
    path: Option<String>,

    #[serde(alias = "DataType", alias = "Datatype")]
    datatype: Option<String>,

    #[serde(alias = "Transform")]
    transform: Option<String>,

    #[serde(alias = "Properties")]
    properties: Option<StoredProperties>,
}

#[derive(Debug, Default, Deserialize)]
struct StoredProperties {
    #[serde(alias = "path")]
    #[serde(rename = "Path")]
    path: Option<String>,

    #[serde(alias = "transform")]
    #[serde(rename = "Transform")]
    transform: Option<String>,
}

impl From<StoredEntry> for MappingEntry {
    fn from(stored: StoredEntry) -> Self {
        let properties = stored.properties.unwrap_or_default();

        MappingEntry {
            column: stored.column,
            path: stored.path.or(properties.path).unwrap_or_default(),
            datatype: stored.datatype.unwrap_or_default(),
            transform: stored.transform.or(properties.transform).unwrap_or_default(),
        }
    }
}

/// Encodes mapping entries as comma separated JSON objects.
///
/// The result has no surrounding brackets; the command serializer adds them.
/// An empty list encodes to an empty string. `transform` is omitted when empty.
pub fn expand(entries: &[MappingEntry]) -> Result<String> {
    let mut out = String::new();
    let mut s = "";

    for entry in entries {
        let encoded =
            serde_json::to_string(&CommandEntry::from(entry)).map_err(anyhow::Error::from)?;
        out.push_str(s);
        out.push_str(&encoded);
        s = ",";
    }

    Ok(out)
}

/// Decodes a mapping payload back into entries, preserving order.
///
/// Accepts a JSON array as returned by `.show ... mapping` as well as the bare
/// fragment produced by [`expand`]. An empty payload decodes to no entries.
pub fn flatten(input: &str) -> Result<Vec<MappingEntry>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(vec![]);
    }

    let decoded = if input.starts_with('[') {
        serde_json::from_str::<Vec<StoredEntry>>(input)
    } else {
        serde_json::from_str::<Vec<StoredEntry>>(&format!("[{input}]"))
    };

    let stored = decoded
        .map_err(|err| Error::invalid_result(format!("malformed mapping payload: {err}")))?;

    Ok(stored.into_iter().map(MappingEntry::from).collect())
}
