//! Two-ticker category comparison tables.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::record::keys;

/// One of the three ESG score categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Environmental risk.
    Environment,
    /// Social risk.
    Social,
    /// Governance risk.
    Governance,
}

impl Category {
    /// All categories in presentation order.
    pub const ALL: [Self; 3] = [Self::Environment, Self::Social, Self::Governance];

    /// Row label shown to users.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Environment => "Environment",
            Self::Social => "Social",
            Self::Governance => "Governance",
        }
    }

    /// Record key holding this category's score.
    #[must_use]
    pub const fn metric_key(self) -> &'static str {
        match self {
            Self::Environment => keys::ENVIRONMENT_SCORE,
            Self::Social => keys::SOCIAL_SCORE,
            Self::Governance => keys::GOVERNANCE_SCORE,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Environment, social and governance scores of one ticker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    /// Environmental risk score.
    pub environment: f64,
    /// Social risk score.
    pub social: f64,
    /// Governance risk score.
    pub governance: f64,
}

impl CategoryScores {
    /// Score for a category.
    #[must_use]
    pub const fn get(&self, category: Category) -> f64 {
        match category {
            Category::Environment => self.environment,
            Category::Social => self.social,
            Category::Governance => self.governance,
        }
    }
}

/// One category row of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Category this row describes.
    pub category: Category,
    /// Score of the first and second ticker.
    pub values: [f64; 2],
}

/// Side-by-side category scores of two tickers.
///
/// Rows are always `Environment`, `Social`, `Governance`, in that order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    labels: [String; 2],
    rows: [ComparisonRow; 3],
}

impl ComparisonTable {
    /// Build a table from two labelled score sets.
    #[must_use]
    pub fn new(labels: [String; 2], a: CategoryScores, b: CategoryScores) -> Self {
        let rows = Category::ALL.map(|category| ComparisonRow {
            category,
            values: [a.get(category), b.get(category)],
        });
        Self { labels, rows }
    }

    /// Column labels, one per compared ticker.
    #[must_use]
    pub const fn labels(&self) -> &[String; 2] {
        &self.labels
    }

    /// Category rows in fixed order.
    #[must_use]
    pub const fn rows(&self) -> &[ComparisonRow; 3] {
        &self.rows
    }

    /// Row labels in order.
    #[must_use]
    pub fn row_labels(&self) -> [&'static str; 3] {
        self.rows.map(|r| r.category.label())
    }

    /// Scores of one compared ticker, by column index (0 or 1).
    #[must_use]
    pub fn column(&self, idx: usize) -> Option<CategoryScores> {
        if idx > 1 {
            return None;
        }
        Some(CategoryScores {
            environment: self.rows[0].values[idx],
            social: self.rows[1].values[idx],
            governance: self.rows[2].values[idx],
        })
    }
}
