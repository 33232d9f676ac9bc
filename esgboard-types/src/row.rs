//! Normalized per-ticker rows and their concatenation into a table.

use core::fmt;

use serde::de::{Error as _, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::record::{Scalar, keys};
use crate::ticker::Ticker;

/// A sustainability record with `company_ticker` as its first column and
/// `maxAge`, when present, as its last column.
///
/// The ticker is kept as typed metadata as well, so identity never depends on
/// column position.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRow {
    ticker: Ticker,
    columns: Vec<(String, Scalar)>,
}

impl NormalizedRow {
    /// Assemble a row from its parts.
    ///
    /// `body` keeps its relative order. Any `company_ticker` or `maxAge` keys in
    /// `body` are discarded in favour of `ticker` and `max_age`.
    #[must_use]
    pub fn assemble(
        ticker: Ticker,
        body: impl IntoIterator<Item = (String, Scalar)>,
        max_age: Option<Scalar>,
    ) -> Self {
        let mut columns = vec![(
            keys::COMPANY_TICKER.to_string(),
            Scalar::Text(ticker.as_str().to_string()),
        )];
        columns.extend(
            body.into_iter()
                .filter(|(k, _)| k != keys::COMPANY_TICKER && k != keys::MAX_AGE),
        );
        if let Some(age) = max_age {
            columns.push((keys::MAX_AGE.to_string(), age));
        }
        Self { ticker, columns }
    }

    /// The ticker this row belongs to.
    #[must_use]
    pub const fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Iterate columns in display order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Column names in display order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(k, _)| k.as_str())
    }

    /// Look up a column by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.columns.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Numeric value of a column, if present and numeric.
    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Scalar::as_f64)
    }

    /// Number of columns, including `company_ticker`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True when the row has no columns. Rows built by
    /// [`assemble`](Self::assemble) always carry `company_ticker`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
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

    /// Raw `highestControversy` value.
    #[must_use]
    pub fn highest_controversy(&self) -> Option<&Scalar> {
        self.get(keys::HIGHEST_CONTROVERSY)
    }
}

impl Serialize for NormalizedRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (k, v) in &self.columns {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for NormalizedRow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RowVisitor;

        impl<'de> Visitor<'de> for RowVisitor {
            type Value = NormalizedRow;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map with a company_ticker entry")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut ticker: Option<Ticker> = None;
                let mut max_age: Option<Scalar> = None;
                let mut body: Vec<(String, Scalar)> = Vec::new();
                while let Some((k, v)) = access.next_entry::<String, Scalar>()? {
                    match k.as_str() {
                        keys::COMPANY_TICKER => {
                            let text = v
                                .as_str()
                                .ok_or_else(|| A::Error::custom("company_ticker must be text"))?;
                            ticker = Some(Ticker::new(text).map_err(A::Error::custom)?);
                        }
                        keys::MAX_AGE => max_age = Some(v),
                        _ => body.push((k, v)),
                    }
                }
                let ticker = ticker.ok_or_else(|| A::Error::missing_field(keys::COMPANY_TICKER))?;
                Ok(NormalizedRow::assemble(ticker, body, max_age))
            }
        }

        deserializer.deserialize_map(RowVisitor)
    }
}

/// Rows concatenated into a rectangular table.
///
/// Columns are the union of all row columns in first-seen order, with
/// `company_ticker` first and `maxAge` last. Cells a row does not carry are
/// `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RowTable {
    columns: Vec<String>,
    rows: Vec<Vec<Option<Scalar>>>,
}

impl RowTable {
    /// Concatenate rows into a table.
    #[must_use]
    pub fn from_rows(rows: &[NormalizedRow]) -> Self {
        if rows.is_empty() {
            return Self::default();
        }
        let mut columns: Vec<String> = vec![keys::COMPANY_TICKER.to_string()];
        let mut has_max_age = false;
        for row in rows {
            for name in row.column_names() {
                if name == keys::MAX_AGE {
                    has_max_age = true;
                } else if !columns.iter().any(|c| c == name) {
                    columns.push(name.to_string());
                }
            }
        }
        if has_max_age {
            columns.push(keys::MAX_AGE.to_string());
        }

        let cells = rows
            .iter()
            .map(|row| columns.iter().map(|c| row.get(c).cloned()).collect())
            .collect();
        Self {
            columns,
            rows: cells,
        }
    }

    /// Column headers.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Table body, one vector of cells per row aligned with [`columns`](Self::columns).
    #[must_use]
    pub fn rows(&self) -> &[Vec<Option<Scalar>>] {
        &self.rows
    }

    /// Cells of one column, top to bottom.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<Vec<Option<&Scalar>>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(self.rows.iter().map(|r| r[idx].as_ref()).collect())
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
