//! Manage Azure Data Explorer (Kusto) ingestion mappings as declarative
//! resources.
//!
//! A [`Provider`] owns the management client every resource talks through.
//! Resources validate their configuration before issuing any command and
//! re-read remote state after every write.
//!
//! ```ignore
//! let provider = adx::Provider::connect(&adx::ProviderConfig::new(
//!     "https://mycluster.westeurope.kusto.windows.net",
//! ))?;
//!
//! let config = adx::TableMappingConfig::from_attributes(attributes)?;
//! let state = provider.table_mapping().create(&config).await?;
//! ```

pub mod provider;
pub use provider::{Provider, ProviderConfig};

pub mod resource;
pub use resource::table_mapping::{TableMappingConfig, TableMappingResource, TableMappingState};

pub mod schema;
pub use schema::ResourceSchema;

pub use adx_core::{
    driver::{self, Driver},
    err, Error, MappingEntry, MappingId, MappingKind, Result, Violation,
};
