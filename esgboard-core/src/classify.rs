//! Static ESG risk and controversy buckets.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::{EsgError, Scalar};

/// Risk bucket derived from a total ESG score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Score below 20.
    Low,
    /// Score in `[20, 40)`.
    Medium,
    /// Score of 40 or more.
    High,
}

impl RiskLevel {
    /// Display label, e.g. "Medium Risk".
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bucket a total ESG score.
///
/// Lower bounds are inclusive: 20 is medium, 40 is high.
///
/// # Errors
/// Returns `InvalidArg` for NaN or infinite scores.
pub fn classify_esg(score: f64) -> Result<RiskLevel, EsgError> {
    if !score.is_finite() {
        return Err(EsgError::InvalidArg(format!(
            "esg score must be finite, got {score}"
        )));
    }
    Ok(if score < 20.0 {
        RiskLevel::Low
    } else if score < 40.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    })
}

/// Controversy severity as reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ControversyLevel {
    /// Level 0.
    None,
    /// Level 1.
    Low,
    /// Level 2.
    Moderate,
    /// Level 3.
    High,
    /// Level 4 and above.
    Severe,
}

impl ControversyLevel {
    /// Levels indexed by their numeric severity.
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Low,
        Self::Moderate,
        Self::High,
        Self::Severe,
    ];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Severe => "Severe",
        }
    }

    /// Classify a raw record value.
    ///
    /// # Errors
    /// Returns `Data` if the value is not numeric, or the errors of
    /// [`classify_controversy`].
    pub fn from_scalar(value: &Scalar) -> Result<Self, EsgError> {
        let level = value.as_f64().ok_or_else(|| {
            EsgError::Data(format!("highestControversy is not numeric: {value}"))
        })?;
        classify_controversy(level)
    }
}

impl fmt::Display for ControversyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a controversy level to its label bucket.
///
/// The value is truncated toward zero and clamped to 4.
///
/// # Errors
/// Returns `InvalidArg` for negative, NaN or infinite values.
pub fn classify_controversy(level: f64) -> Result<ControversyLevel, EsgError> {
    if !level.is_finite() || level < 0.0 {
        return Err(EsgError::InvalidArg(format!(
            "controversy level must be a finite, non-negative number, got {level}"
        )));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let idx = (level.trunc() as usize).min(ControversyLevel::ALL.len() - 1);
    Ok(ControversyLevel::ALL[idx])
}
