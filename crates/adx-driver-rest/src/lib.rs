mod service_error;
use service_error::ServiceError;

mod v1;

use adx_core::{
    async_trait,
    driver::{Driver, Operation, Response},
    Error, Result,
};
use adx_kql::Serializer;
use std::{borrow::Cow, time::Duration};
use url::Url;
use uuid::Uuid;

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Management endpoint, relative to the cluster URL.
const MGMT_PATH: &str = "/v1/rest/mgmt";

/// Reported to the cluster in `x-ms-app` and as the request ID prefix.
const APP_NAME: &str = "adx-provider";

#[derive(Debug, Clone)]
pub struct Options {
    /// Bearer token sent with every request. Acquiring and refreshing the
    /// token is up to the caller.
    pub token: Option<String>,

    /// Timeout for a single management request.
    pub timeout: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Driver executing management commands over the Kusto REST API (v1).
#[derive(Debug)]
pub struct Rest {
    /// Cluster URL as configured, without a trailing slash
    endpoint: String,

    mgmt_url: Url,
    token: Option<String>,
    client: reqwest::Client,
}

impl Rest {
    /// Create a driver for the cluster at `url`, e.g.
    /// `https://mycluster.westeurope.kusto.windows.net`.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::with_options(url, Options::default())
    }

    pub fn with_options(url: impl Into<String>, options: Options) -> Result<Self> {
        let url_str = url.into();
        let endpoint = url_str.trim_end_matches('/').to_string();

        let url = Url::parse(&endpoint).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        // `http` is accepted for local emulators.
        if !matches!(url.scheme(), "https" | "http") {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have an `https` scheme; url={url_str}"
            )));
        }

        if url.host_str().is_none() {
            return Err(Error::invalid_connection_url(format!(
                "missing host in connection URL; url={url_str}"
            )));
        }

        let mgmt_url = Url::parse(&format!("{endpoint}{MGMT_PATH}")).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(Error::driver)?;

        Ok(Self {
            endpoint,
            mgmt_url,
            token: options.token,
            client,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// URL management commands are posted to.
    pub fn mgmt_url(&self) -> &Url {
        &self.mgmt_url
    }
}

#[async_trait]
impl Driver for Rest {
    fn endpoint(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.endpoint)
    }

    async fn exec(&self, database: &str, op: Operation) -> Result<Response> {
        let command = Serializer::new().serialize_operation(&op);
        let request_id = format!("{APP_NAME};{}", Uuid::new_v4());

        tracing::debug!(%database, %command, %request_id, "executing management command");

        let mut request = self
            .client
            .post(self.mgmt_url.clone())
            .header("x-ms-client-request-id", &request_id)
            .header("x-ms-app", APP_NAME)
            .json(&v1::Request {
                db: database,
                csl: &command,
            });

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(Error::driver)?;
        let status = response.status();
        let body = response.text().await.map_err(Error::driver)?;

        if !status.is_success() {
            let err = ServiceError::from_body(status, &body);
            tracing::debug!(%request_id, %err, "management command failed");
            return Err(Error::driver(err));
        }

        let response = v1::decode(&body)?;
        tracing::debug!(%request_id, rows = response.len(), "management command completed");

        Ok(response)
    }
}
