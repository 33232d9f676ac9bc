use std::sync::Arc;

use async_trait::async_trait;
use esgboard_core::EsgError;
use serde_json::{Map, Value};

use crate::client::YfClient;

/// ESG abstraction over the raw `esgScores` module (so we can inject mocks in tests).
#[async_trait]
pub trait YfEsg: Send + Sync {
    /// Fetch the unflattened `esgScores` object for `symbol`.
    async fn esg_scores(&self, symbol: &str) -> Result<Map<String, Value>, EsgError>;
}

/// Real adapter backed by a shared [`YfClient`].
///
/// Clones share the cookie jar and the cached crumb.
#[derive(Debug, Clone)]
pub struct RealAdapter {
    client: Arc<YfClient>,
}

impl RealAdapter {
    /// Build an adapter around a default client.
    ///
    /// # Errors
    /// Fails if the HTTP client cannot be constructed.
    pub fn new_default() -> Result<Self, EsgError> {
        Ok(Self::new(YfClient::builder().build()?))
    }

    /// Wrap an existing client.
    #[must_use]
    pub fn new(client: YfClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl YfEsg for RealAdapter {
    async fn esg_scores(&self, symbol: &str) -> Result<Map<String, Value>, EsgError> {
        self.client.esg_scores(symbol).await
    }
}

/* -------- Test-only lightweight adapter constructors ------- */

#[cfg(feature = "test-adapters")]
impl dyn YfEsg {
    /// Build a `YfEsg` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfEsg>
    where
        F: Send + Sync + 'static + Fn(String) -> Result<Map<String, Value>, EsgError>,
    {
        struct FnEsg<F>(F);
        #[async_trait]
        impl<F> YfEsg for FnEsg<F>
        where
            F: Send + Sync + 'static + Fn(String) -> Result<Map<String, Value>, EsgError>,
        {
            async fn esg_scores(&self, symbol: &str) -> Result<Map<String, Value>, EsgError> {
                (self.0)(symbol.to_string())
            }
        }
        Arc::new(FnEsg(f))
    }
}

/// Hands out adapter handles to `YfConnector::from_adapter` (tests only).
///
/// Unimplemented capabilities default to `unsupported`.
#[cfg(feature = "test-adapters")]
pub trait CloneArcAdapters {
    /// Clone as `Arc<dyn YfEsg>`.
    fn clone_arc_esg(&self) -> Arc<dyn YfEsg> {
        <dyn YfEsg>::from_fn(|_| Err(EsgError::unsupported("sustainability")))
    }
}

#[cfg(feature = "test-adapters")]
impl CloneArcAdapters for RealAdapter {
    fn clone_arc_esg(&self) -> Arc<dyn YfEsg> {
        Arc::new(self.clone()) as Arc<dyn YfEsg>
    }
}
