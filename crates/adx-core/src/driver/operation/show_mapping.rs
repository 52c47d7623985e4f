use super::Operation;

use crate::MappingKind;

#[derive(Debug, Clone, PartialEq)]
pub struct ShowMapping {
    pub table: String,
    pub kind: MappingKind,
    pub name: String,
}

impl From<ShowMapping> for Operation {
    fn from(value: ShowMapping) -> Self {
        Self::ShowMapping(value)
    }
}
