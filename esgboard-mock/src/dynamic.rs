use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use esgboard_core::{EsgConnector, EsgError, SustainabilityProvider, SustainabilityRecord, Ticker};

/// Scripted answer for one ticker.
#[derive(Debug, Clone)]
pub enum MockBehavior<T> {
    /// Answer with this value.
    Return(T),
    /// Answer with this error.
    Fail(EsgError),
    /// Never answer; pair with a provider timeout.
    Hang,
}

#[derive(Default)]
struct Script {
    rules: HashMap<Ticker, MockBehavior<SustainabilityRecord>>,
    calls: Vec<Ticker>,
}

/// Test-side handle that scripts a [`DynamicMockConnector`] and reads its call log.
pub struct DynamicMockController {
    script: Arc<Mutex<Script>>,
}

impl DynamicMockController {
    /// Set the behavior of `sustainability` calls for a ticker.
    ///
    /// Tickers without a rule are not found.
    pub async fn set_behavior(&self, ticker: Ticker, behavior: MockBehavior<SustainabilityRecord>) {
        self.script.lock().await.rules.insert(ticker, behavior);
    }

    /// Tickers requested so far, in call order.
    pub async fn calls(&self) -> Vec<Ticker> {
        self.script.lock().await.calls.clone()
    }

    /// Forget every scripted answer and the call log.
    pub async fn clear_all_behaviors(&self) {
        *self.script.lock().await = Script::default();
    }
}

/// Connector whose answers are scripted per ticker through a controller.
pub struct DynamicMockConnector {
    name: &'static str,
    script: Arc<Mutex<Script>>,
}

impl DynamicMockConnector {
    /// Create a connector registered under `name`, plus its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn EsgConnector>, DynamicMockController) {
        let script = Arc::new(Mutex::new(Script::default()));
        let controller = DynamicMockController {
            script: Arc::clone(&script),
        };
        let me: Arc<dyn EsgConnector> = Arc::new(Self { name, script });
        (me, controller)
    }
}

impl EsgConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_sustainability_provider(&self) -> Option<&dyn SustainabilityProvider> {
        Some(self as &dyn SustainabilityProvider)
    }
}

#[async_trait]
impl SustainabilityProvider for DynamicMockConnector {
    async fn sustainability(&self, ticker: &Ticker) -> Result<SustainabilityRecord, EsgError> {
        let behavior = {
            let mut script = self.script.lock().await;
            script.calls.push(ticker.clone());
            script.rules.get(ticker).cloned()
        };

        match behavior {
            Some(MockBehavior::Return(rec)) => Ok(rec),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None => Err(EsgError::not_found(format!("esg for {ticker}"))),
        }
    }
}
