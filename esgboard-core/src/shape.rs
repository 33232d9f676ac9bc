//! Record shaping: raw provider record to normalized row.

use crate::{EsgError, NormalizedRow, Notice, SustainabilityRecord, Ticker, keys};

/// Normalize a provider record for display.
///
/// `company_ticker` becomes the first column and `maxAge`, if present, the
/// last. Every other field passes through unchanged and in order; values are
/// not validated.
#[must_use]
pub fn shape(ticker: &Ticker, mut record: SustainabilityRecord) -> NormalizedRow {
    let max_age = record.remove(keys::MAX_AGE);
    NormalizedRow::assemble(ticker.clone(), record.into_pairs(), max_age)
}

/// Outcome of looking up one ticker.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// The provider returned data; already shaped.
    Found(NormalizedRow),
    /// The provider has no sustainability data for the ticker.
    NotFound(Ticker),
    /// Retrieval failed.
    Failed {
        /// Ticker that was requested.
        ticker: Ticker,
        /// Underlying failure.
        error: EsgError,
    },
}

impl Lookup {
    /// Classify a provider result and shape it on success.
    #[must_use]
    pub fn from_result(ticker: Ticker, res: Result<SustainabilityRecord, EsgError>) -> Self {
        match res {
            Ok(record) => Self::Found(shape(&ticker, record)),
            Err(e) if e.is_not_found() => Self::NotFound(ticker),
            Err(error) => Self::Failed { ticker, error },
        }
    }

    /// Ticker this lookup was for.
    #[must_use]
    pub const fn ticker(&self) -> &Ticker {
        match self {
            Self::Found(row) => row.ticker(),
            Self::NotFound(ticker) | Self::Failed { ticker, .. } => ticker,
        }
    }

    /// User-visible message, if any: a warning for missing data, an error for
    /// a failed retrieval.
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::Found(_) => None,
            Self::NotFound(ticker) => Some(Notice::warning(format!(
                "No ESG data found for {ticker}."
            ))),
            Self::Failed { ticker, error } => Some(Notice::error(format!(
                "Error retrieving data for {ticker}: {error}"
            ))),
        }
    }

    /// The row, dropping any failure.
    #[must_use]
    pub fn into_row(self) -> Option<NormalizedRow> {
        match self {
            Self::Found(row) => Some(row),
            _ => None,
        }
    }

    /// The row, or the failure as an error.
    ///
    /// # Errors
    /// Returns `NotFound` for missing data and the original error otherwise.
    pub fn into_result(self) -> Result<NormalizedRow, EsgError> {
        match self {
            Self::Found(row) => Ok(row),
            Self::NotFound(ticker) => Err(EsgError::not_found(format!("esg for {ticker}"))),
            Self::Failed { error, .. } => Err(error),
        }
    }
}
