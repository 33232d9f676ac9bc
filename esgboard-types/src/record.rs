//! Raw sustainability records as returned by a data provider.

use core::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Metric names with a known meaning. Providers may send any other key too.
pub mod keys {
    /// Identifier column inserted by the record shaper.
    pub const COMPANY_TICKER: &str = "company_ticker";
    /// Composite ESG risk score.
    pub const TOTAL_ESG: &str = "totalEsg";
    /// Environmental risk score.
    pub const ENVIRONMENT_SCORE: &str = "environmentScore";
    /// Social risk score.
    pub const SOCIAL_SCORE: &str = "socialScore";
    /// Governance risk score.
    pub const GOVERNANCE_SCORE: &str = "governanceScore";
    /// Highest controversy severity, 0..=4.
    pub const HIGHEST_CONTROVERSY: &str = "highestControversy";
    /// Age of the provider's cached payload in seconds.
    pub const MAX_AGE: &str = "maxAge";
}

/// A single scalar metric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Boolean flag, e.g. involvement in tobacco.
    Bool(bool),
    /// Numeric score or count.
    Number(f64),
    /// Free text, e.g. peer group name or rating label.
    Text(String),
}

impl Scalar {
    /// Numeric view of the value; text and booleans are not coerced.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text view of the value when it is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i64> for Scalar {
    #[allow(clippy::cast_precision_loss)]
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

/// Ordered metric-name to value mapping for one ticker at one point in time.
///
/// No key is guaranteed to be present. Insertion order is the provider's order
/// and is preserved through serialization.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SustainabilityRecord {
    fields: Vec<(String, Scalar)>,
}

impl SustainabilityRecord {
    /// Create an empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Insert or replace a field. A replaced field keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Scalar>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.fields.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.fields.push((key, value));
        }
    }

    /// Builder-style variant of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.insert(key, value);
        self
    }

    /// Remove a field, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<Scalar> {
        let idx = self.fields.iter().position(|(k, _)| k == key)?;
        Some(self.fields.remove(idx).1)
    }

    /// Look up a field by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Numeric value of a field, if present and numeric.
    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Scalar::as_f64)
    }

    /// Whether a field is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Field names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Consume the record into its ordered pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(String, Scalar)> {
        self.fields
    }

    /// `totalEsg`, when numeric.
    #[must_use]
    pub fn total_esg(&self) -> Option<f64> {
        self.number(keys::TOTAL_ESG)
    }

    /// `environmentScore`, when numeric.
    #[must_use]
    pub fn environment_score(&self) -> Option<f64> {
        self.number(keys::ENVIRONMENT_SCORE)
    }

    /// `socialScore`, when numeric.
    #[must_use]
    pub fn social_score(&self) -> Option<f64> {
        self.number(keys::SOCIAL_SCORE)
    }

    /// `governanceScore`, when numeric.
    #[must_use]
    pub fn governance_score(&self) -> Option<f64> {
        self.number(keys::GOVERNANCE_SCORE)
    }

    /// Raw `highestControversy` value; validated by the classifier.
    #[must_use]
    pub fn highest_controversy(&self) -> Option<&Scalar> {
        self.get(keys::HIGHEST_CONTROVERSY)
    }

    /// `maxAge`, when numeric.
    #[must_use]
    pub fn max_age(&self) -> Option<f64> {
        self.number(keys::MAX_AGE)
    }
}

impl<K: Into<String>, V: Into<Scalar>> FromIterator<(K, V)> for SustainabilityRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut rec = Self::new();
        for (k, v) in iter {
            rec.insert(k, v);
        }
        rec
    }
}

impl Serialize for SustainabilityRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SustainabilityRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = SustainabilityRecord;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of metric names to scalar values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut rec = SustainabilityRecord::new();
                while let Some((k, v)) = access.next_entry::<String, Scalar>()? {
                    rec.insert(k, v);
                }
                Ok(rec)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}
