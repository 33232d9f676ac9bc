//! esgboard-mock
//!
//! Deterministic connectors for tests and offline runs:
//! - [`MockConnector`] serves static fixtures.
//! - [`DynamicMockConnector`] defers every call to a test-side controller.
#![warn(missing_docs)]

use std::time::Duration;

use async_trait::async_trait;
use esgboard_core::{EsgConnector, EsgError, SustainabilityProvider, SustainabilityRecord, Ticker};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};
pub use fixtures::esg::TICKERS as FIXTURE_TICKERS;

/// Mock connector for CI-safe runs. Provides deterministic data from static fixtures.
///
/// `FAIL` always fails with a connector error and `TIMEOUT` answers after a
/// short delay. `UNRATED` carries a text `highestControversy`. Tickers
/// without a fixture are not found.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Connector name used in errors and logs.
    pub const KEY: &'static str = "esgboard-mock";

    /// Create the connector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_timeout(ticker: &str, capability: &'static str) -> Result<(), EsgError> {
        match ticker {
            "FAIL" => Err(EsgError::connector(
                Self::KEY,
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                // Long enough to trip a short orchestrator timeout in tests.
                tokio::time::sleep(Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl EsgConnector for MockConnector {
    fn name(&self) -> &'static str {
        Self::KEY
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_sustainability_provider(&self) -> Option<&dyn SustainabilityProvider> {
        Some(self as &dyn SustainabilityProvider)
    }
}

#[async_trait]
impl SustainabilityProvider for MockConnector {
    async fn sustainability(&self, ticker: &Ticker) -> Result<SustainabilityRecord, EsgError> {
        let s = ticker.as_str();
        Self::maybe_fail_or_timeout(s, "sustainability").await?;
        fixtures::esg::by_ticker(s)
            .ok_or_else(|| EsgError::not_found(format!("esg for {s}")))
    }
}
