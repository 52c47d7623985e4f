use super::TableMappingResource;
use adx_core::{Error, MappingEntry, MappingKind, Result, Violation};

use serde::Deserialize;

/// Desired state of an ingestion mapping, as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TableMappingConfig {
    pub name: String,
    pub database_name: String,
    pub table_name: String,

    /// Kept as written; checked against [`MappingKind::NAMES`] by [`validate`].
    ///
    /// [`validate`]: TableMappingConfig::validate
    pub kind: String,

    pub mapping: Vec<MappingEntry>,

    /// Computed. Ignored when present in configuration.
    #[serde(default)]
    pub last_updated_on: Option<String>,
}

impl TableMappingConfig {
    pub fn new(
        name: impl Into<String>,
        database_name: impl Into<String>,
        table_name: impl Into<String>,
        kind: impl Into<String>,
        mapping: Vec<MappingEntry>,
    ) -> Self {
        Self {
            name: name.into(),
            database_name: database_name.into(),
            table_name: table_name.into(),
            kind: kind.into(),
            mapping,
            last_updated_on: None,
        }
    }

    /// Binds and validates a resource block's attributes.
    pub fn from_attributes(attributes: serde_json::Value) -> Result<Self> {
        let config: TableMappingConfig = serde_json::from_value(attributes)
            .map_err(|err| Error::validation(vec![Violation::malformed(err.to_string())]))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every attribute against the resource schema, reporting all
    /// violations at once.
    pub fn validate(&self) -> Result<()> {
        let schema = TableMappingResource::schema();
        let block = &schema.block;

        let mut violations = vec![];
        violations.extend(block.check("name", "name", &self.name));
        violations.extend(block.check("database_name", "database_name", &self.database_name));
        violations.extend(block.check("table_name", "table_name", &self.table_name));
        violations.extend(block.check("kind", "kind", &self.kind));

        if let Some(entry_block) = block.nested("mapping") {
            for (i, entry) in self.mapping.iter().enumerate() {
                for (attribute, value) in [
                    ("column", &entry.column),
                    ("path", &entry.path),
                    ("datatype", &entry.datatype),
                    ("transform", &entry.transform),
                ] {
                    let path = format!("mapping.{i}.{attribute}");
                    violations.extend(entry_block.check(&path, attribute, value));
                }
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(Error::validation(violations))
        }
    }

    /// The parsed mapping kind. Only meaningful after [`validate`] succeeded.
    ///
    /// [`validate`]: TableMappingConfig::validate
    pub fn mapping_kind(&self) -> Result<MappingKind> {
        self.kind.parse()
    }
}
