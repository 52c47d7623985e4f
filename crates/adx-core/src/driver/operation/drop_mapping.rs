use super::Operation;

use crate::MappingKind;

#[derive(Debug, Clone, PartialEq)]
pub struct DropMapping {
    pub table: String,
    pub kind: MappingKind,
    pub name: String,
}

impl From<DropMapping> for Operation {
    fn from(value: DropMapping) -> Self {
        Self::DropMapping(value)
    }
}
