//! Data transfer objects and configuration primitives shared across the
//! esgboard workspace.
#![warn(missing_docs)]

mod batch;
mod comparison;
mod config;
mod error;
mod page;
pub mod record;
mod reports;
mod row;
mod ticker;

#[cfg(feature = "dataframe")]
pub mod dataframe;

pub use batch::TickerBatch;
pub use comparison::{Category, CategoryScores, ComparisonRow, ComparisonTable};
pub use config::{DEFAULT_BATCH_LIMIT, DEFAULT_TICKER_COLUMN, DashboardConfig};
pub use error::EsgError;
pub use page::Page;
pub use record::{Scalar, SustainabilityRecord};
pub use reports::{BatchReport, Notice, NoticeLevel};
pub use row::{NormalizedRow, RowTable};
pub use ticker::Ticker;
