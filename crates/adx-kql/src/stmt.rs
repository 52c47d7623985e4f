pub use adx_core::driver::operation::{CreateOrAlterMapping, DropMapping, ShowMapping};

use adx_core::{driver::Operation, MappingEntry, MappingKind, Result};

/// A management command against a table's ingestion mappings.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    CreateOrAlterMapping(CreateOrAlterMapping),
    DropMapping(DropMapping),
    ShowMapping(ShowMapping),
}

impl Statement {
    /// Creates or replaces a mapping with the given entries.
    pub fn create_or_alter_mapping(
        table: impl Into<String>,
        kind: MappingKind,
        name: impl Into<String>,
        entries: &[MappingEntry],
    ) -> Result<Self> {
        Ok(CreateOrAlterMapping {
            table: table.into(),
            kind,
            name: name.into(),
            mapping: adx_core::schema::expand(entries)?,
        }
        .into())
    }

    pub fn show_mapping(table: impl Into<String>, kind: MappingKind, name: impl Into<String>) -> Self {
        ShowMapping {
            table: table.into(),
            kind,
            name: name.into(),
        }
        .into()
    }

    pub fn drop_mapping(table: impl Into<String>, kind: MappingKind, name: impl Into<String>) -> Self {
        DropMapping {
            table: table.into(),
            kind,
            name: name.into(),
        }
        .into()
    }

    /// Returns `true` if executing the statement changes cluster state.
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Statement::ShowMapping(_))
    }
}

impl From<CreateOrAlterMapping> for Statement {
    fn from(value: CreateOrAlterMapping) -> Self {
        Self::CreateOrAlterMapping(value)
    }
}

impl From<DropMapping> for Statement {
    fn from(value: DropMapping) -> Self {
        Self::DropMapping(value)
    }
}

impl From<ShowMapping> for Statement {
    fn from(value: ShowMapping) -> Self {
        Self::ShowMapping(value)
    }
}

impl From<Operation> for Statement {
    fn from(value: Operation) -> Self {
        match value {
            Operation::CreateOrAlterMapping(op) => Statement::CreateOrAlterMapping(op),
            Operation::DropMapping(op) => Statement::DropMapping(op),
            Operation::ShowMapping(op) => Statement::ShowMapping(op),
        }
    }
}
