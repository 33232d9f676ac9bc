//! Report envelopes produced by the orchestrator.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::row::{NormalizedRow, RowTable};

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    /// Non-fatal condition, e.g. no data for a ticker.
    Warning,
    /// A retrieval failed; the message carries the underlying cause.
    Error,
}

/// A message meant for the person using the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Human-readable text.
    pub message: String,
}

impl Notice {
    /// Build a warning.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    /// Build an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// True for warnings.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.level == NoticeLevel::Warning
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            NoticeLevel::Warning => write!(f, "warning: {}", self.message),
            NoticeLevel::Error => write!(f, "error: {}", self.message),
        }
    }
}

/// Outcome of a bulk lookup.
///
/// Carries the rows that yielded data, in input order, and every notice
/// raised along the way.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BatchReport {
    /// Rows for tickers that returned data.
    pub rows: Vec<NormalizedRow>,
    /// Non-fatal issues encountered while building the report.
    pub notices: Vec<Notice>,
    /// Number of tickers looked up.
    pub requested: usize,
    /// Number of input tickers discarded by the batch limit.
    pub dropped: usize,
}

impl BatchReport {
    /// Concatenate the rows into a table.
    #[must_use]
    pub fn table(&self) -> RowTable {
        RowTable::from_rows(&self.rows)
    }

    /// Warnings only.
    pub fn warnings(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter().filter(|n| n.level == NoticeLevel::Warning)
    }

    /// Errors only.
    pub fn errors(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter().filter(|n| n.level == NoticeLevel::Error)
    }
}
