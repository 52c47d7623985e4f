use super::Operation;

use crate::MappingKind;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrAlterMapping {
    /// Table the mapping is attached to
    pub table: String,

    /// Ingestion format the mapping applies to
    pub kind: MappingKind,

    /// Mapping name, unique per table and kind
    pub name: String,

    /// Mapping entries already encoded as comma separated JSON objects,
    /// without the surrounding brackets. See [`crate::schema::expand`].
    pub mapping: String,
}

impl From<CreateOrAlterMapping> for Operation {
    fn from(value: CreateOrAlterMapping) -> Self {
        Self::CreateOrAlterMapping(value)
    }
}
