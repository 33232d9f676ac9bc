//! Configuration types shared across the orchestrator and front ends.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default cap on the number of tickers processed by one batch run.
pub const DEFAULT_BATCH_LIMIT: usize = 100;

/// Default name of the CSV column holding ticker symbols.
pub const DEFAULT_TICKER_COLUMN: &str = "ticker_code";

/// Global configuration for the `Dashboard` orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Timeout for individual provider requests.
    pub provider_timeout: Duration,
    /// Maximum number of tickers taken from a batch; excess entries are dropped.
    pub batch_limit: usize,
    /// Header of the CSV column that lists ticker symbols.
    pub ticker_column: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(10),
            batch_limit: DEFAULT_BATCH_LIMIT,
            ticker_column: DEFAULT_TICKER_COLUMN.to_string(),
        }
    }
}
