mod create_or_alter_mapping;
pub use create_or_alter_mapping::CreateOrAlterMapping;

mod drop_mapping;
pub use drop_mapping::DropMapping;

mod show_mapping;
pub use show_mapping::ShowMapping;

use crate::MappingKind;

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Create an ingestion mapping, or replace it if it already exists
    CreateOrAlterMapping(CreateOrAlterMapping),

    /// Drop an ingestion mapping
    DropMapping(DropMapping),

    /// List the ingestion mapping with the given name
    ShowMapping(ShowMapping),
}

impl Operation {
    /// Table the mapping belongs to.
    pub fn table(&self) -> &str {
        match self {
            Operation::CreateOrAlterMapping(op) => &op.table,
            Operation::DropMapping(op) => &op.table,
            Operation::ShowMapping(op) => &op.table,
        }
    }

    pub fn kind(&self) -> MappingKind {
        match self {
            Operation::CreateOrAlterMapping(op) => op.kind,
            Operation::DropMapping(op) => op.kind,
            Operation::ShowMapping(op) => op.kind,
        }
    }

    /// Name of the mapping the operation targets.
    pub fn name(&self) -> &str {
        match self {
            Operation::CreateOrAlterMapping(op) => &op.name,
            Operation::DropMapping(op) => &op.name,
            Operation::ShowMapping(op) => &op.name,
        }
    }

    pub fn is_create_or_alter_mapping(&self) -> bool {
        matches!(self, Operation::CreateOrAlterMapping(_))
    }

    pub fn is_drop_mapping(&self) -> bool {
        matches!(self, Operation::DropMapping(_))
    }

    pub fn is_show_mapping(&self) -> bool {
        matches!(self, Operation::ShowMapping(_))
    }
}
