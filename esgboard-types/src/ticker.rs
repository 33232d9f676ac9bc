//! Validated ticker symbols.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EsgError;

/// A validated, upper-cased ticker symbol such as `KO` or `BRK-B`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Parse user input into a ticker.
    ///
    /// Surrounding whitespace is trimmed and letters are upper-cased.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the input is empty or contains whitespace or
    /// control characters.
    pub fn new(raw: &str) -> Result<Self, EsgError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EsgError::InvalidArg("ticker must not be empty".into()));
        }
        if let Some(bad) = trimmed
            .chars()
            .find(|c| c.is_whitespace() || c.is_control())
        {
            return Err(EsgError::InvalidArg(format!(
                "ticker '{trimmed}' contains invalid character {bad:?}"
            )));
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    /// Borrow the symbol text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::str::FromStr for Ticker {
    type Err = EsgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Ticker {
    type Error = EsgError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl TryFrom<&str> for Ticker {
    type Error = EsgError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Ticker> for String {
    fn from(t: Ticker) -> Self {
        t.0
    }
}
