//! The `adx_table_mapping` resource.
//!
//! Create and update issue the same idempotent `.create-or-alter` command, so
//! both go through [`TableMappingResource::create`]. Every write is followed by
//! a read that refreshes the computed `last_updated_on`.

mod config;
pub use config::TableMappingConfig;

mod state;
pub use state::TableMappingState;

use crate::schema::{Attribute, Block, ResourceSchema, Validator};
use adx_core::{
    driver::{
        operation::{CreateOrAlterMapping, DropMapping, ShowMapping},
        Driver,
    },
    err,
    schema::expand,
    Error, MappingId, MappingKind, Result, TableMapping,
};

use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct TableMappingResource {
    driver: Arc<dyn Driver>,
}

impl TableMappingResource {
    pub const TYPE_NAME: &'static str = "adx_table_mapping";

    pub fn new(driver: Arc<dyn Driver>) -> Self {
        Self { driver }
    }

    pub fn schema() -> ResourceSchema {
        let entry = Block::new()
            .with_attribute(
                "column",
                Attribute::required_string().with_validator(Validator::NotEmpty),
            )
            .with_attribute(
                "path",
                Attribute::required_string().with_validator(Validator::NotEmpty),
            )
            .with_attribute(
                "datatype",
                Attribute::required_string().with_validator(Validator::NotEmpty),
            )
            .with_attribute("transform", Attribute::optional_string());

        // Segments of the resource ID must not contain its delimiter.
        let id_segment = || {
            Attribute::required_string()
                .with_validator(Validator::NotEmpty)
                .with_validator(Validator::Excludes(MappingId::DELIMITER))
        };

        ResourceSchema::v0()
            .with_attribute("name", id_segment())
            .with_attribute("database_name", id_segment())
            .with_attribute("table_name", id_segment())
            .with_attribute(
                "kind",
                Attribute::required_string().with_validator(Validator::OneOf(MappingKind::NAMES)),
            )
            .with_attribute("mapping", Attribute::required_list(entry))
            .with_attribute("last_updated_on", Attribute::optional_computed_string())
    }

    /// Creates the mapping, replacing any existing mapping with the same name.
    pub async fn create(&self, config: &TableMappingConfig) -> Result<TableMappingState> {
        config.validate()?;

        let kind = config.mapping_kind()?;
        let id = MappingId::new(
            self.driver.endpoint(),
            &config.database_name,
            &config.table_name,
            kind,
            &config.name,
        );

        let op = CreateOrAlterMapping {
            table: config.table_name.clone(),
            kind,
            name: config.name.clone(),
            mapping: expand(&config.mapping)?,
        };

        self.driver
            .exec(&config.database_name, op.into())
            .await
            .map_err(|e| {
                e.context(err!(
                    "error creating Mapping {:?} (Table {:?}, Database {:?})",
                    config.name,
                    config.table_name,
                    config.database_name
                ))
            })?;

        tracing::info!(%id, "created table mapping");

        match self.read_by_id(&id).await? {
            Some(state) => Ok(state),
            None => Err(Error::record_not_found(format!("mapping={id}")).context(err!(
                "error creating Mapping {:?} (Table {:?}, Database {:?}): read after create returned no rows",
                config.name,
                config.table_name,
                config.database_name
            ))),
        }
    }

    /// Same command as [`create`](Self::create); mappings are altered in place.
    pub async fn update(&self, config: &TableMappingConfig) -> Result<TableMappingState> {
        self.create(config).await
    }

    /// Reads the mapping, returning `None` when it no longer exists.
    pub async fn read(&self, id: &str) -> Result<Option<TableMappingState>> {
        let id: MappingId = id.parse()?;
        self.read_by_id(&id).await
    }

    pub async fn read_by_id(&self, id: &MappingId) -> Result<Option<TableMappingState>> {
        self.check_endpoint(id);

        let op = ShowMapping {
            table: id.table.clone(),
            kind: id.kind,
            name: id.name.clone(),
        };

        let context = || {
            err!(
                "error reading Mapping {:?} (Table {:?}, Database {:?})",
                id.name,
                id.table,
                id.database
            )
        };

        let response = self
            .driver
            .exec(&id.database, op.into())
            .await
            .map_err(|e| e.context(context()))?;

        let rows: Vec<TableMapping> = response.decode().map_err(|e| e.context(context()))?;

        let Some(remote) = rows.into_iter().next() else {
            tracing::warn!(%id, "table mapping not found, removing from state");
            return Ok(None);
        };

        let state = TableMappingState::from_remote(id, remote).map_err(|e| e.context(context()))?;
        tracing::debug!(%id, entries = state.mapping.len(), "read table mapping");

        Ok(Some(state))
    }

    /// Drops the mapping. Dropping a mapping that is already gone is an error.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let id: MappingId = id.parse()?;
        self.check_endpoint(&id);

        let op = DropMapping {
            table: id.table.clone(),
            kind: id.kind,
            name: id.name.clone(),
        };

        self.driver
            .exec(&id.database, op.into())
            .await
            .map_err(|e| {
                e.context(err!(
                    "error deleting Table Mapping {:?} (Table {:?}, Database {:?})",
                    id.name,
                    id.table,
                    id.database
                ))
            })?;

        tracing::info!(%id, "deleted table mapping");
        Ok(())
    }

    /// Adopts an existing mapping into state.
    pub async fn import(&self, id: &str) -> Result<TableMappingState> {
        let parsed: MappingId = id.parse()?;

        self.read_by_id(&parsed).await?.ok_or_else(|| {
            Error::record_not_found(format!("mapping={id}"))
                .context(err!("error importing Mapping {:?}", parsed.name))
        })
    }

    fn check_endpoint(&self, id: &MappingId) {
        let endpoint = self.driver.endpoint();
        if id.endpoint != endpoint {
            tracing::warn!(
                %id,
                provider_endpoint = %endpoint,
                "resource ID names a different cluster than the provider; using the provider's"
            );
        }
    }
}
