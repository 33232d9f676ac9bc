#![allow(dead_code)]

// Re-export helpers so tests can `use helpers::*;`
pub mod mock_connector;

pub use mock_connector::MockConnector;

use esgboard_core::{SustainabilityRecord, Ticker};

pub const AAPL: &str = "AAPL";
pub const MSFT: &str = "MSFT";
pub const KO: &str = "KO";

/// Parse a ticker without unwrap noise in tests.
pub fn t(s: &str) -> Ticker {
    Ticker::new(s).expect("valid test ticker")
}

/// A record with all three category scores plus `maxAge` first, as Yahoo sends it.
pub fn rec(total: f64, e: f64, s: f64, g: f64) -> SustainabilityRecord {
    SustainabilityRecord::new()
        .with("maxAge", 86400.0)
        .with("totalEsg", total)
        .with("environmentScore", e)
        .with("socialScore", s)
        .with("governanceScore", g)
        .with("highestControversy", 2.0)
}
