#![allow(dead_code)]
#![allow(clippy::type_complexity)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use esgboard_core::{EsgConnector, EsgError, SustainabilityProvider, SustainabilityRecord, Ticker};
use tokio::time::{Duration, sleep};

/// Simple in-memory connector used by integration tests.
pub struct MockConnector {
    pub name: &'static str,
    pub delay_ms: u64,
    pub has_esg: bool,
    pub esg_fn: Arc<dyn Fn(&Ticker) -> Result<SustainabilityRecord, EsgError> + Send + Sync>,
    pub calls: AtomicUsize,
}

impl MockConnector {
    pub fn builder() -> MockConnectorBuilder {
        MockConnectorBuilder::new()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EsgConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_sustainability_provider(&self) -> Option<&dyn SustainabilityProvider> {
        if self.has_esg {
            Some(self as &dyn SustainabilityProvider)
        } else {
            None
        }
    }
}

#[async_trait]
impl SustainabilityProvider for MockConnector {
    async fn sustainability(&self, ticker: &Ticker) -> Result<SustainabilityRecord, EsgError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
        (self.esg_fn)(ticker)
    }
}

pub struct MockConnectorBuilder {
    name: &'static str,
    delay_ms: u64,
    has_esg: bool,
    esg_fn: Arc<dyn Fn(&Ticker) -> Result<SustainabilityRecord, EsgError> + Send + Sync>,
}

impl MockConnectorBuilder {
    pub fn new() -> Self {
        Self {
            name: "mock",
            delay_ms: 0,
            has_esg: true,
            esg_fn: Arc::new(|t| Err(EsgError::not_found(format!("esg for {t}")))),
        }
    }

    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn delay(mut self, d: Duration) -> Self {
        self.delay_ms = u64::try_from(d.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn without_esg(mut self) -> Self {
        self.has_esg = false;
        self
    }

    pub fn returns_ok(mut self, rec: SustainabilityRecord) -> Self {
        self.esg_fn = Arc::new(move |_t| Ok(rec.clone()));
        self
    }

    pub fn fails_with(mut self, msg: &'static str) -> Self {
        let name = self.name;
        self.esg_fn = Arc::new(move |_t| Err(EsgError::connector(name, msg)));
        self
    }

    pub fn with_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Ticker) -> Result<SustainabilityRecord, EsgError> + Send + Sync + 'static,
    {
        self.esg_fn = Arc::new(f);
        self
    }

    pub fn build(self) -> Arc<MockConnector> {
        Arc::new(MockConnector {
            name: self.name,
            delay_ms: self.delay_ms,
            has_esg: self.has_esg,
            esg_fn: self.esg_fn,
            calls: AtomicUsize::new(0),
        })
    }
}
