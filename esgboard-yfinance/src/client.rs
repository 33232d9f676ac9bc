//! Minimal Yahoo Finance HTTP client for the `esgScores` quote-summary module.

use std::time::Duration;

use esgboard_core::EsgError;
use serde::Deserialize;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use url::Url;

pub(crate) const CONNECTOR: &str = "esgboard-yfinance";

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";
const DEFAULT_COOKIE_URL: &str = "https://fc.yahoo.com/";
const DEFAULT_QUERY_BASE: &str = "https://query2.finance.yahoo.com/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummary,
}

#[derive(Debug, Deserialize)]
struct QuoteSummary {
    result: Option<Vec<Map<String, Value>>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    #[serde(default)]
    description: String,
}

fn transport(e: &reqwest::Error, context: &str) -> EsgError {
    EsgError::connector(CONNECTOR, format!("{context}: {e}"))
}

/// Yahoo client holding the session cookie jar and the cached crumb.
///
/// The crumb is fetched lazily on the first request and reused until Yahoo
/// answers with HTTP 401.
pub struct YfClient {
    http: reqwest::Client,
    cookie_url: Url,
    query_base: Url,
    crumb: RwLock<Option<String>>,
}

impl std::fmt::Debug for YfClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YfClient")
            .field("cookie_url", &self.cookie_url.as_str())
            .field("query_base", &self.query_base.as_str())
            .finish_non_exhaustive()
    }
}

impl YfClient {
    /// Start configuring a client.
    #[must_use]
    pub fn builder() -> YfClientBuilder {
        YfClientBuilder::default()
    }

    /// Fetch the raw `esgScores` module for `symbol`.
    ///
    /// # Errors
    /// Returns `NotFound` when Yahoo has no sustainability data for the
    /// symbol, and a connector error for any other failure.
    pub async fn esg_scores(&self, symbol: &str) -> Result<Map<String, Value>, EsgError> {
        let crumb = self.crumb().await?;
        let resp = self.quote_summary(symbol, &crumb).await?;
        if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "esgboard::yfinance", symbol, "crumb rejected, refreshing");
            self.crumb.write().await.take();
            let crumb = self.crumb().await?;
            let retry = self.quote_summary(symbol, &crumb).await?;
            return Self::decode(symbol, retry).await;
        }
        Self::decode(symbol, resp).await
    }

    async fn quote_summary(&self, symbol: &str, crumb: &str) -> Result<reqwest::Response, EsgError> {
        let mut url = self
            .query_base
            .join("v10/finance/quoteSummary/")
            .map_err(|e| EsgError::Other(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| EsgError::Other("query base cannot carry a path".into()))?
            .pop_if_empty()
            .push(symbol);
        url.query_pairs_mut()
            .append_pair("modules", "esgScores")
            .append_pair("crumb", crumb);
        self.http
            .get(url)
            .send()
            .await
            .map_err(|e| transport(&e, &format!("esg for {symbol}")))
    }

    async fn decode(symbol: &str, resp: reqwest::Response) -> Result<Map<String, Value>, EsgError> {
        let status = resp.status();
        let what = format!("esg for {symbol}");
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(EsgError::not_found(what));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(EsgError::connector(CONNECTOR, format!("rate limit: {what}")));
        }
        let body = resp.text().await.map_err(|e| transport(&e, &what))?;
        let parsed = serde_json::from_str::<Envelope>(&body);
        if !status.is_success() {
            let not_found = parsed
                .as_ref()
                .ok()
                .and_then(|env| env.quote_summary.error.as_ref())
                .is_some_and(|e| e.code == "Not Found");
            if not_found {
                return Err(EsgError::not_found(what));
            }
            return Err(EsgError::connector(
                CONNECTOR,
                format!("status {}: {what}", status.as_u16()),
            ));
        }

        let env = parsed
            .map_err(|e| EsgError::connector(CONNECTOR, format!("decode {what}: {e}")))?;
        if let Some(err) = env.quote_summary.error {
            if err.code == "Not Found" {
                return Err(EsgError::not_found(what));
            }
            return Err(EsgError::connector(
                CONNECTOR,
                format!("{}: {}", err.code, err.description),
            ));
        }
        env.quote_summary
            .result
            .and_then(|r| r.into_iter().next())
            .and_then(|mut m| m.remove("esgScores"))
            .and_then(|v| match v {
                Value::Object(o) => Some(o),
                _ => None,
            })
            .ok_or_else(|| EsgError::not_found(what))
    }

    async fn crumb(&self) -> Result<String, EsgError> {
        if let Some(c) = self.crumb.read().await.as_ref() {
            return Ok(c.clone());
        }
        let mut slot = self.crumb.write().await;
        if let Some(c) = slot.as_ref() {
            return Ok(c.clone());
        }

        // The cookie endpoint answers 404 but still sets the session cookie.
        self.http
            .get(self.cookie_url.clone())
            .send()
            .await
            .map_err(|e| transport(&e, "cookie"))?;

        let url = self
            .query_base
            .join("v1/test/getcrumb")
            .map_err(|e| EsgError::Other(e.to_string()))?;
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| transport(&e, "crumb"))?;
        let status = resp.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(EsgError::connector(CONNECTOR, "rate limit: crumb"));
        }
        if !status.is_success() {
            return Err(EsgError::connector(
                CONNECTOR,
                format!("status {}: crumb", status.as_u16()),
            ));
        }
        let crumb = resp
            .text()
            .await
            .map_err(|e| transport(&e, "crumb"))?
            .trim()
            .to_string();
        if crumb.is_empty() || crumb.contains('<') {
            return Err(EsgError::connector(CONNECTOR, "invalid crumb"));
        }
        *slot = Some(crumb.clone());
        Ok(crumb)
    }
}

/// Builder for [`YfClient`]. Base URLs are overridable for tests.
#[derive(Debug, Default)]
pub struct YfClientBuilder {
    http: Option<reqwest::Client>,
    cookie_url: Option<String>,
    query_base: Option<String>,
    timeout: Option<Duration>,
}

impl YfClientBuilder {
    /// Use a caller-provided HTTP client. It must have a cookie store enabled.
    #[must_use]
    pub fn custom_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Override the endpoint that issues the session cookie.
    #[must_use]
    pub fn cookie_url(mut self, url: impl Into<String>) -> Self {
        self.cookie_url = Some(url.into());
        self
    }

    /// Override the host serving `getcrumb` and `quoteSummary`.
    #[must_use]
    pub fn query_base(mut self, url: impl Into<String>) -> Self {
        self.query_base = Some(url.into());
        self
    }

    /// Per-request timeout of the internally built HTTP client.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns `InvalidArg` for unparsable base URLs and a connector error if
    /// the HTTP client cannot be constructed.
    pub fn build(self) -> Result<YfClient, EsgError> {
        let http = match self.http {
            Some(h) => h,
            None => reqwest::Client::builder()
                .cookie_store(true)
                .no_proxy()
                .user_agent(USER_AGENT)
                .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
                .build()
                .map_err(|e| transport(&e, "http client"))?,
        };
        let cookie_url = parse_url(self.cookie_url.as_deref().unwrap_or(DEFAULT_COOKIE_URL))?;
        let query_base = parse_base(self.query_base.as_deref().unwrap_or(DEFAULT_QUERY_BASE))?;
        Ok(YfClient {
            http,
            cookie_url,
            query_base,
            crumb: RwLock::new(None),
        })
    }
}

fn parse_url(raw: &str) -> Result<Url, EsgError> {
    Url::parse(raw).map_err(|e| EsgError::InvalidArg(format!("invalid url {raw}: {e}")))
}

fn parse_base(raw: &str) -> Result<Url, EsgError> {
    // `Url::join` replaces the last path segment unless the base ends in '/'.
    if raw.ends_with('/') {
        parse_url(raw)
    } else {
        parse_url(&format!("{raw}/"))
    }
}
