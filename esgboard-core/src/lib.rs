//! esgboard-core
//!
//! Core types, traits, and pure transformations shared across the esgboard
//! workspace.
//!
//! - `connector`: the `EsgConnector` trait and the sustainability capability.
//! - `shape`: turns a raw provider record into a `NormalizedRow`.
//! - `classify`: static risk and controversy buckets.
//! - `compare`: the three-row category comparison.
//! - `scorecard`: headline tiles for a single row.
//! - `ticker_file`: reads a capped ticker list from CSV.
#![warn(missing_docs)]

/// Connector capability traits and the primary `EsgConnector` interface.
pub mod connector;
pub mod classify;
pub mod compare;
pub mod scorecard;
pub mod shape;
pub mod ticker_file;
pub mod types;

pub use classify::{ControversyLevel, RiskLevel, classify_controversy, classify_esg};
pub use compare::{category_scores, compare};
pub use connector::{EsgConnector, SustainabilityProvider};
pub use scorecard::ScoreCard;
pub use shape::{Lookup, shape};
pub use ticker_file::read_ticker_batch;
pub use types::*;
