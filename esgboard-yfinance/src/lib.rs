//! esgboard-yfinance
//!
//! Public connector that implements `EsgConnector` on top of Yahoo Finance's
//! `quoteSummary` endpoint. Only the `esgScores` module is requested; the
//! cookie and crumb handshake Yahoo requires is handled by [`client::YfClient`].
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by [`client::YfClient`].
pub mod adapter;
mod builder;
/// HTTP client for the cookie/crumb handshake and the quote-summary call.
pub mod client;
pub mod flatten;

use std::sync::Arc;

#[cfg(feature = "test-adapters")]
use adapter::CloneArcAdapters;
use adapter::{RealAdapter, YfEsg};
use async_trait::async_trait;
pub use builder::YfConnectorBuilder;
use esgboard_core::{EsgConnector, EsgError, SustainabilityProvider, SustainabilityRecord, Ticker};
pub use flatten::flatten_esg_scores;

#[cfg(feature = "test-adapters")]
type EsgAdapter = Arc<dyn YfEsg>;
#[cfg(not(feature = "test-adapters"))]
type EsgAdapter = Arc<RealAdapter>;

/// Public connector type. Production users will construct with
/// `YfConnector::new_default()` or [`YfConnector::builder`].
pub struct YfConnector {
    esg: EsgAdapter,
}

impl YfConnector {
    /// Stable connector name used in errors and logs.
    pub const KEY: &'static str = client::CONNECTOR;

    fn looks_like_not_found(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("not found") || m.contains("no data")
    }

    fn normalize_error(e: EsgError, what: &str) -> EsgError {
        match e {
            EsgError::Connector { connector: _, msg } => {
                if Self::looks_like_not_found(&msg) {
                    EsgError::not_found(what.to_string())
                } else {
                    EsgError::connector(Self::KEY, msg)
                }
            }
            EsgError::Other(msg) => EsgError::connector(Self::KEY, msg),
            other => other,
        }
    }

    /// Build with a fresh client pointed at Yahoo's production hosts.
    ///
    /// # Errors
    /// Fails if the HTTP client cannot be constructed.
    pub fn new_default() -> Result<Self, EsgError> {
        Ok(Self::from_real(Arc::new(RealAdapter::new_default()?)))
    }

    pub(crate) fn from_real(adapter: Arc<RealAdapter>) -> Self {
        Self { esg: adapter }
    }

    /// For tests/injection (requires the `test-adapters` feature).
    ///
    /// Accepts a borrowed adapter to avoid unnecessary moves.
    #[cfg(feature = "test-adapters")]
    pub fn from_adapter<A: CloneArcAdapters + 'static>(adapter: &A) -> Self {
        Self {
            esg: adapter.clone_arc_esg(),
        }
    }
}

#[async_trait]
impl SustainabilityProvider for YfConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "esgboard_yfinance::sustainability",
            skip(self, ticker),
            fields(ticker = %ticker),
        )
    )]
    async fn sustainability(&self, ticker: &Ticker) -> Result<SustainabilityRecord, EsgError> {
        let what = format!("esg for {ticker}");
        let module = self
            .esg
            .esg_scores(ticker.as_str())
            .await
            .map_err(|e| Self::normalize_error(e, &what))?;
        Ok(flatten_esg_scores(module))
    }
}

impl EsgConnector for YfConnector {
    fn name(&self) -> &'static str {
        Self::KEY
    }

    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
    }

    fn as_sustainability_provider(&self) -> Option<&dyn SustainabilityProvider> {
        Some(self as &dyn SustainabilityProvider)
    }
}
