//! Re-export of the data transfer objects from `esgboard-types`.
// Consolidated re-exports so downstream crates can depend on `esgboard-core` only

pub use esgboard_types::record::keys;
pub use esgboard_types::{
    BatchReport, Category, CategoryScores, ComparisonRow, ComparisonTable, DEFAULT_BATCH_LIMIT,
    DEFAULT_TICKER_COLUMN, DashboardConfig, EsgError, NormalizedRow, Notice, NoticeLevel, Page,
    RowTable, Scalar, SustainabilityRecord, Ticker, TickerBatch,
};

// Optional: re-export DataFrame conversion trait when the feature is enabled
#[cfg(feature = "dataframe")]
pub use esgboard_types::dataframe::ToDataFrame;
