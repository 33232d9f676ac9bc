//! Workspace error type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the esgboard workspace.
///
/// Two kinds matter to callers: [`EsgError::NotFound`] means the provider has no
/// sustainability data for a ticker and is surfaced as a warning. Every other
/// variant is a retrieval failure and is surfaced as an error carrying the
/// underlying message.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq)]
#[non_exhaustive]
pub enum EsgError {
    /// No registered connector offers the capability.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// Capability label, e.g. "sustainability".
        capability: String,
    },

    /// A record lacks a field a view needs, or holds the wrong type.
    #[error("data issue: {0}")]
    Data(String),

    /// Rejected caller input: a bad ticker, a zero limit, a missing column.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The uploaded ticker file could not be read.
    #[error("csv error: {0}")]
    Csv(String),

    /// A provider call failed.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector key, e.g. "esgboard-yfinance".
        connector: String,
        /// Provider message.
        msg: String,
    },

    /// Anything not covered above.
    #[error("unknown error: {0}")]
    Other(String),

    /// No sustainability data exists for the requested resource.
    #[error("not found: {what}")]
    NotFound {
        /// What was looked up, e.g. "esg for AAPL".
        what: String,
    },

    /// Every provider that was tried failed, in registration order.
    #[error("all providers failed: {}", join_causes(.0))]
    AllProvidersFailed(Vec<EsgError>),

    /// A provider call ran past the configured timeout.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Connector key.
        connector: String,
        /// Capability label.
        capability: String,
    },
}

fn join_causes(errs: &[EsgError]) -> String {
    errs.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl EsgError {
    /// `Unsupported` for a capability label.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// `Connector` error tagged with the connector key.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// `NotFound` for a description such as "esg for KO".
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// `ProviderTimeout` for a connector and capability.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// True when the provider simply has no data, as opposed to a failed retrieval.
    ///
    /// Aggregates count as not-found only when every inner error is not-found.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::AllProvidersFailed(inner) => {
                !inner.is_empty() && inner.iter().all(Self::is_not_found)
            }
            _ => false,
        }
    }

    /// Leaf causes, with nested `AllProvidersFailed` unwrapped.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::AllProvidersFailed(list) => list.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}
