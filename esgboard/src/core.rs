use std::sync::Arc;
use std::time::Duration;

use esgboard_core::{DashboardConfig, EsgConnector, EsgError, SustainabilityRecord, Ticker};

/// Orchestrator that routes sustainability lookups across registered providers.
pub struct Dashboard {
    pub(crate) connectors: Vec<Arc<dyn EsgConnector>>,
    pub(crate) cfg: DashboardConfig,
}

/// Builder for constructing a `Dashboard` with custom configuration.
pub struct DashboardBuilder {
    connectors: Vec<Arc<dyn EsgConnector>>,
    cfg: DashboardConfig,
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardBuilder {
    /// Create a new builder with default configuration.
    ///
    /// Starts with no connectors; register at least one via [`with_connector`](Self::with_connector).
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: DashboardConfig::default(),
        }
    }

    /// Register a provider connector.
    ///
    /// Registration order is the fallback order: the first connector that
    /// returns data wins. Duplicates are not deduplicated.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn EsgConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: DashboardConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the per-provider request timeout.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set the maximum number of tickers taken from one batch.
    #[must_use]
    pub const fn batch_limit(mut self, limit: usize) -> Self {
        self.cfg.batch_limit = limit;
        self
    }

    /// Set the CSV column that lists ticker symbols for uploads.
    #[must_use]
    pub fn ticker_column(mut self, column: impl Into<String>) -> Self {
        self.cfg.ticker_column = column.into();
        self
    }

    /// Build the `Dashboard`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered, the batch
    /// limit is zero, or the ticker column is blank.
    pub fn build(self) -> Result<Dashboard, EsgError> {
        if self.connectors.is_empty() {
            return Err(EsgError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        if self.cfg.batch_limit == 0 {
            return Err(EsgError::InvalidArg("batch limit must be positive".to_string()));
        }
        if self.cfg.ticker_column.trim().is_empty() {
            return Err(EsgError::InvalidArg("ticker column must not be blank".to_string()));
        }
        Ok(Dashboard {
            connectors: self.connectors,
            cfg: self.cfg,
        })
    }
}

pub(crate) fn tag_err(connector: &str, e: EsgError) -> EsgError {
    match e {
        e @ (EsgError::NotFound { .. }
        | EsgError::ProviderTimeout { .. }
        | EsgError::Connector { .. }
        | EsgError::AllProvidersFailed(_)) => e,
        other => EsgError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

impl Dashboard {
    /// Start building a new `Dashboard`.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use esgboard::Dashboard;
    /// use esgboard_yfinance::YfConnector;
    ///
    /// let dash = Dashboard::builder()
    ///     .with_connector(Arc::new(YfConnector::new_default()?))
    ///     .provider_timeout(std::time::Duration::from_secs(5))
    ///     .build()?;
    /// let row = dash.view(&"KO".parse()?).await?;
    /// ```
    #[must_use]
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &DashboardConfig {
        &self.cfg
    }

    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "esgboard::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, EsgError>
    where
        Fut: core::future::Future<Output = Result<T, EsgError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(EsgError::provider_timeout(connector_name, capability)))
    }

    /// Fetch a raw record, trying providers in registration order.
    ///
    /// - The first success wins.
    /// - `NotFound` from every attempted provider collapses to one `NotFound`.
    /// - Anything else is reported as `AllProvidersFailed` with each cause.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "esgboard::core::fetch_sustainability",
            skip(self, ticker),
            fields(ticker = %ticker),
        )
    )]
    pub(crate) async fn fetch_sustainability(
        &self,
        ticker: &Ticker,
    ) -> Result<SustainabilityRecord, EsgError> {
        const CAPABILITY: &str = "sustainability";

        let mut attempted_any = false;
        let mut errors: Vec<EsgError> = Vec::new();

        for c in &self.connectors {
            let Some(p) = c.as_sustainability_provider() else {
                continue;
            };
            attempted_any = true;
            match Self::provider_call_with_timeout(
                c.name(),
                CAPABILITY,
                self.cfg.provider_timeout,
                p.sustainability(ticker),
            )
            .await
            {
                Ok(v) => return Ok(v),
                Err(e @ (EsgError::NotFound { .. } | EsgError::ProviderTimeout { .. })) => {
                    errors.push(e);
                }
                Err(e) => errors.push(tag_err(c.name(), e)),
            }
        }

        if !attempted_any {
            return Err(EsgError::unsupported(CAPABILITY));
        }

        if errors
            .iter()
            .all(|e| matches!(e, EsgError::NotFound { .. }))
        {
            return Err(EsgError::not_found(format!("esg for {ticker}")));
        }

        if errors.len() == 1 {
            return Err(errors.remove(0));
        }
        Err(EsgError::AllProvidersFailed(errors))
    }
}
