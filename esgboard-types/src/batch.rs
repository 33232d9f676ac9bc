//! Capped ticker lists for bulk lookups.

use serde::{Deserialize, Serialize};

use crate::ticker::Ticker;

/// Ordered tickers for one bulk lookup, already capped to the batch limit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TickerBatch {
    tickers: Vec<Ticker>,
    dropped: usize,
}

impl TickerBatch {
    /// Keep the first `limit` tickers and record how many were dropped.
    #[must_use]
    pub fn capped(mut tickers: Vec<Ticker>, limit: usize) -> Self {
        let dropped = tickers.len().saturating_sub(limit);
        tickers.truncate(limit);
        Self { tickers, dropped }
    }

    /// Build from already-capped parts.
    #[must_use]
    pub const fn from_parts(tickers: Vec<Ticker>, dropped: usize) -> Self {
        Self { tickers, dropped }
    }

    /// Tickers in input order.
    #[must_use]
    pub fn tickers(&self) -> &[Ticker] {
        &self.tickers
    }

    /// Number of input entries discarded by the cap.
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.dropped
    }

    /// Number of tickers kept.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    /// True when no tickers were kept.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }
}

impl IntoIterator for TickerBatch {
    type Item = Ticker;
    type IntoIter = std::vec::IntoIter<Ticker>;

    fn into_iter(self) -> Self::IntoIter {
        self.tickers.into_iter()
    }
}
