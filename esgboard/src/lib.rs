//! esgboard looks up sustainability (ESG) risk data across pluggable providers.
//!
//! Overview
//! - Routes lookups to connectors implementing the `esgboard_core` contracts,
//!   in registration order, with a per-provider timeout.
//! - Shapes raw provider records into display rows (`company_ticker` first,
//!   `maxAge` last).
//! - Builds single-ticker views, two-ticker category comparisons, and batch
//!   reports from manual lists or uploaded CSV files.
//!
//! Missing data and failed retrievals are values, not panics: a lookup yields
//! a [`Lookup`](esgboard_core::Lookup) and batches collect
//! [`Notice`](esgboard_core::Notice)s instead of aborting.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use esgboard::Dashboard;
//! use esgboard_mock::MockConnector;
//!
//! let dash = Dashboard::builder()
//!     .with_connector(Arc::new(MockConnector::new()))
//!     .build()?;
//!
//! let cmp = dash.compare(&"AAPL".parse()?, &"MSFT".parse()?).await?;
//! for row in cmp.table.rows() {
//!     println!("{}: {:?}", row.category, row.values);
//! }
//!
//! let report = dash.upload(std::fs::File::open("tickers.csv")?).await?;
//! println!("{} rows, {} notices", report.rows.len(), report.notices.len());
//! ```
#![warn(missing_docs)]

mod core;
mod router;

pub use crate::core::{Dashboard, DashboardBuilder};
pub use router::batch::NO_DATA_FOUND;
pub use router::views::Comparison;

pub use esgboard_core::{
    BatchReport, ComparisonTable, DashboardConfig, EsgConnector, EsgError, Lookup, NormalizedRow,
    Notice, NoticeLevel, RowTable, ScoreCard, SustainabilityRecord, Ticker, TickerBatch,
};
