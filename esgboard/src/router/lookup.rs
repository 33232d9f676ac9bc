use esgboard_core::{EsgError, Lookup, SustainabilityRecord, Ticker};

use crate::Dashboard;

impl Dashboard {
    /// Fetch the raw sustainability record for a ticker.
    ///
    /// # Errors
    /// Returns `NotFound` if no provider has data, or the provider failures
    /// otherwise.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "esgboard::router",
            skip(self, ticker),
            fields(ticker = %ticker),
        )
    )]
    pub async fn sustainability(&self, ticker: &Ticker) -> Result<SustainabilityRecord, EsgError> {
        self.fetch_sustainability(ticker).await
    }

    /// Look up one ticker and shape the result.
    ///
    /// Never fails: missing data and retrieval errors are carried in the
    /// returned [`Lookup`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "esgboard::router",
            skip(self, ticker),
            fields(ticker = %ticker),
        )
    )]
    pub async fn lookup(&self, ticker: &Ticker) -> Lookup {
        let res = self.fetch_sustainability(ticker).await;
        #[cfg(feature = "tracing")]
        if let Err(e) = &res {
            if e.is_not_found() {
                tracing::debug!(target: "esgboard::router", ticker = %ticker, "no data");
            } else {
                tracing::warn!(target: "esgboard::router", ticker = %ticker, error = %e, "lookup failed");
            }
        }
        Lookup::from_result(ticker.clone(), res)
    }
}
