use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use esgboard_core::EsgConnector;

/// Environment variable that switches the CLI to offline fixtures.
pub const USE_MOCK_ENV: &str = "ESGBOARD_USE_MOCK";

/// Pick the data provider: fixtures when `use_mock` is set, Yahoo otherwise.
pub fn get_connector(use_mock: bool, http_timeout: Duration) -> Result<Arc<dyn EsgConnector>> {
    if use_mock {
        tracing::info!("using offline mock connector");
        return Ok(Arc::new(esgboard_mock::MockConnector::new()));
    }
    let yf = esgboard_yfinance::YfConnector::builder()
        .timeout(http_timeout)
        .build()?;
    Ok(Arc::new(yf))
}
