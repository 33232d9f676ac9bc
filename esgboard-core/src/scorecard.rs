//! Headline metric tiles for a single ticker.

use serde::Serialize;

use crate::classify::{ControversyLevel, RiskLevel, classify_esg};
use crate::{EsgError, NormalizedRow, Notice, Ticker, keys};

fn keep<T>(
    ticker: &Ticker,
    field: &str,
    res: Result<T, EsgError>,
    notices: &mut Vec<Notice>,
) -> Option<T> {
    res.map_err(|e| {
        notices.push(Notice::error(format!(
            "{field} for {ticker} could not be classified: {e}"
        )));
    })
    .ok()
}

/// Tiles shown above a single-ticker table.
///
/// Every metric is optional because providers do not guarantee any key. A
/// value that cannot be classified leaves its tile empty and adds an error
/// to `notices`; the rest of the card is unaffected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreCard {
    /// Ticker the tiles describe.
    pub ticker: Ticker,
    /// `totalEsg`.
    pub total_esg: Option<f64>,
    /// Bucket of `totalEsg`.
    pub risk: Option<RiskLevel>,
    /// `environmentScore`.
    pub environment: Option<f64>,
    /// `socialScore`.
    pub social: Option<f64>,
    /// `governanceScore`.
    pub governance: Option<f64>,
    /// Bucket of `highestControversy`.
    pub controversy: Option<ControversyLevel>,
    /// Classification failures, one per affected field.
    pub notices: Vec<Notice>,
}

impl ScoreCard {
    /// Derive the tiles from a normalized row.
    #[must_use]
    pub fn from_row(row: &NormalizedRow) -> Self {
        let ticker = row.ticker();
        let mut notices = Vec::new();

        let total_esg = row.total_esg();
        let risk = total_esg.and_then(|v| {
            keep(ticker, keys::TOTAL_ESG, classify_esg(v), &mut notices)
        });
        let controversy = row.highest_controversy().and_then(|v| {
            keep(
                ticker,
                keys::HIGHEST_CONTROVERSY,
                ControversyLevel::from_scalar(v),
                &mut notices,
            )
        });
        Self {
            ticker: ticker.clone(),
            total_esg,
            risk,
            environment: row.environment_score(),
            social: row.social_score(),
            governance: row.governance_score(),
            controversy,
            notices,
        }
    }
}
