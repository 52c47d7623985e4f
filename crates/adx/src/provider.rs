use crate::{resource::table_mapping::TableMappingResource, schema::ResourceSchema};
use adx_core::{driver::Driver, Error, Result, Violation};

use serde::Deserialize;
use std::{borrow::Cow, sync::Arc};

/// Provider block configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// Cluster URL, e.g. `https://mycluster.westeurope.kusto.windows.net`
    pub endpoint: String,

    /// Bearer token sent with every management command
    #[serde(default)]
    pub token: Option<String>,

    /// Per request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl ProviderConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: None,
            timeout_secs: default_timeout_secs(),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Binds the provider block's attributes.
    pub fn from_attributes(attributes: serde_json::Value) -> Result<Self> {
        let config: ProviderConfig = serde_json::from_value(attributes)
            .map_err(|err| Error::validation(vec![Violation::malformed(err.to_string())]))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(Error::validation(vec![Violation::empty("endpoint")]));
        }
        Ok(())
    }
}

/// Entry point handing resources the management client they share.
#[derive(Debug, Clone)]
pub struct Provider {
    driver: Arc<dyn Driver>,
}

impl Provider {
    pub fn new(driver: impl Driver) -> Self {
        Self::from_shared(Arc::new(driver))
    }

    pub fn from_shared(driver: Arc<dyn Driver>) -> Self {
        Self { driver }
    }

    /// Connects to the cluster named by `config` over REST.
    #[cfg(feature = "rest")]
    pub fn connect(config: &ProviderConfig) -> Result<Self> {
        config.validate()?;

        let options = adx_driver_rest::Options {
            token: config.token.clone(),
            timeout: std::time::Duration::from_secs(config.timeout_secs),
        };
        let driver = adx_driver_rest::Rest::with_options(&config.endpoint, options)?;

        tracing::debug!(endpoint = %config.endpoint, "connected provider");
        Ok(Self::new(driver))
    }

    pub fn driver(&self) -> &Arc<dyn Driver> {
        &self.driver
    }

    pub fn endpoint(&self) -> Cow<'_, str> {
        self.driver.endpoint()
    }

    pub fn table_mapping(&self) -> TableMappingResource {
        TableMappingResource::new(self.driver.clone())
    }

    /// Schemas of every resource type, keyed by type name.
    pub fn resource_schemas(&self) -> Vec<(&'static str, ResourceSchema)> {
        vec![(TableMappingResource::TYPE_NAME, TableMappingResource::schema())]
    }
}
