use std::io::Read;

use esgboard_core::{BatchReport, EsgError, Lookup, Notice, Ticker, TickerBatch, read_ticker_batch};

use crate::Dashboard;

/// Warning raised when a batch yields no rows at all.
pub const NO_DATA_FOUND: &str = "No ESG data found for the provided tickers.";

impl Dashboard {
    /// Look up many tickers, one after the other, in input order.
    ///
    /// Input beyond the configured batch limit is dropped before any provider
    /// call. Rows are kept only for tickers with data. Each missing ticker
    /// raises a warning and each failed retrieval an error; when no ticker
    /// yields data, the warnings collapse into a single [`NO_DATA_FOUND`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "esgboard::router", skip(self, tickers))
    )]
    pub async fn aggregate<I>(&self, tickers: I) -> BatchReport
    where
        I: IntoIterator<Item = Ticker>,
    {
        let batch = TickerBatch::capped(tickers.into_iter().collect(), self.cfg.batch_limit);
        self.aggregate_batch(batch).await
    }

    /// Look up an already-capped batch.
    pub async fn aggregate_batch(&self, batch: TickerBatch) -> BatchReport {
        let dropped = batch.dropped();
        let requested = batch.len();
        let mut rows = Vec::new();
        let mut notices: Vec<Notice> = Vec::new();

        for ticker in batch {
            let lookup = self.lookup(&ticker).await;
            notices.extend(lookup.notice());
            if let Lookup::Found(row) = lookup {
                rows.push(row);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "esgboard::router",
            requested,
            dropped,
            found = rows.len(),
            "batch complete"
        );

        if rows.is_empty() {
            notices.retain(|n| !n.is_warning());
            notices.insert(0, Notice::warning(NO_DATA_FOUND));
        }

        BatchReport {
            rows,
            notices,
            requested,
            dropped,
        }
    }

    /// Read tickers from CSV and aggregate them.
    ///
    /// Uses the configured ticker column and batch limit.
    ///
    /// # Errors
    /// Returns `Csv` for malformed input and `InvalidArg` if the ticker
    /// column is missing or holds an invalid ticker.
    pub async fn upload<R: Read>(&self, reader: R) -> Result<BatchReport, EsgError> {
        let batch = read_ticker_batch(reader, &self.cfg.ticker_column, self.cfg.batch_limit)?;
        Ok(self.aggregate_batch(batch).await)
    }
}
