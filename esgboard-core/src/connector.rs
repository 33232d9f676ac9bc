use async_trait::async_trait;

use crate::{EsgError, SustainabilityRecord, Ticker};

/// Focused role trait for connectors that provide ESG sustainability records.
#[async_trait]
pub trait SustainabilityProvider: Send + Sync {
    /// Fetch the raw sustainability record for `ticker`.
    ///
    /// Returns `EsgError::NotFound` when the provider has no data for the
    /// ticker; any other error is a failed retrieval.
    async fn sustainability(&self, ticker: &Ticker) -> Result<SustainabilityRecord, EsgError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
pub trait EsgConnector: Send + Sync {
    /// A stable identifier used in errors and logs (e.g., "esgboard-yfinance").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// If implemented, returns a trait object for sustainability records.
    fn as_sustainability_provider(&self) -> Option<&dyn SustainabilityProvider> {
        None
    }
}
