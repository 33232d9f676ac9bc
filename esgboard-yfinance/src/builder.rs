use std::sync::Arc;
use std::time::Duration;

use esgboard_core::EsgError;

use crate::YfConnector;
use crate::adapter::RealAdapter;
use crate::client::{YfClient, YfClientBuilder};

/// Builder for a [`YfConnector`] with custom endpoints or HTTP client.
#[derive(Debug, Default)]
pub struct YfConnectorBuilder {
    client: YfClientBuilder,
}

impl YfConnectorBuilder {
    /// Use a caller-provided `reqwest::Client`.
    ///
    /// Note: the client should enable a cookie store for the cookie/crumb flow.
    #[must_use]
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.client = self.client.custom_client(http);
        self
    }

    /// Override the cookie endpoint (default `https://fc.yahoo.com/`).
    #[must_use]
    pub fn cookie_url(mut self, url: impl Into<String>) -> Self {
        self.client = self.client.cookie_url(url);
        self
    }

    /// Override the API host (default `https://query2.finance.yahoo.com/`).
    #[must_use]
    pub fn query_base(mut self, url: impl Into<String>) -> Self {
        self.client = self.client.query_base(url);
        self
    }

    /// Per-request HTTP timeout; ignored when a custom client is supplied.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.client = self.client.timeout(timeout);
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns an error if a URL is invalid or the HTTP client cannot be built.
    pub fn build(self) -> Result<YfConnector, EsgError> {
        let client: YfClient = self.client.build()?;
        Ok(YfConnector::from_real(Arc::new(RealAdapter::new(client))))
    }
}

impl YfConnector {
    /// Returns an unconfigured builder.
    #[must_use]
    pub fn builder() -> YfConnectorBuilder {
        YfConnectorBuilder::default()
    }
}
