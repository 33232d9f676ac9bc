use esgboard_core::{ComparisonTable, EsgError, NormalizedRow, ScoreCard, Ticker, compare};

use crate::Dashboard;

/// Two looked-up rows and their category comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Rows of the first and second ticker.
    pub rows: [NormalizedRow; 2],
    /// Environment, social and governance scores side by side.
    pub table: ComparisonTable,
}

impl Comparison {
    /// Tickers in compared order.
    #[must_use]
    pub fn tickers(&self) -> [&Ticker; 2] {
        [self.rows[0].ticker(), self.rows[1].ticker()]
    }
}

impl Dashboard {
    /// Look up a single ticker for display.
    ///
    /// # Errors
    /// Returns `NotFound` when no provider has data and the retrieval error
    /// otherwise.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "esgboard::router",
            skip(self, ticker),
            fields(ticker = %ticker),
        )
    )]
    pub async fn view(&self, ticker: &Ticker) -> Result<NormalizedRow, EsgError> {
        self.lookup(ticker).await.into_result()
    }

    /// Look up a ticker and derive its headline tiles.
    ///
    /// Unclassifiable metrics blank their own tile and are reported in
    /// [`ScoreCard::notices`]; the row is returned regardless.
    ///
    /// # Errors
    /// Fails like [`view`](Self::view).
    pub async fn score_card(&self, ticker: &Ticker) -> Result<(NormalizedRow, ScoreCard), EsgError> {
        let row = self.view(ticker).await?;
        let card = ScoreCard::from_row(&row);
        Ok((row, card))
    }

    /// Look up two tickers and compare their category scores.
    ///
    /// Both lookups run even if the first fails, one after the other.
    ///
    /// # Errors
    /// Returns the first lookup failure, or a `Data` error if either row
    /// lacks a category score.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "esgboard::router",
            skip(self, a, b),
            fields(a = %a, b = %b),
        )
    )]
    pub async fn compare(&self, a: &Ticker, b: &Ticker) -> Result<Comparison, EsgError> {
        let first = self.lookup(a).await;
        let second = self.lookup(b).await;
        let (ra, rb) = (first.into_result()?, second.into_result()?);
        let table = compare(&ra, &rb, a.as_str(), b.as_str())?;
        Ok(Comparison {
            rows: [ra, rb],
            table,
        })
    }
}
