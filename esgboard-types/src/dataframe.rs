//! Polars conversion for concatenated rows.

use polars::prelude::*;

use crate::record::Scalar;
use crate::row::{NormalizedRow, RowTable};

/// Conversion into a Polars `DataFrame`.
pub trait ToDataFrame {
    /// Build a `DataFrame` with one column per table column.
    ///
    /// # Errors
    /// Returns a Polars error if the frame cannot be assembled.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;
}

fn column_series(name: &str, cells: &[Option<&Scalar>]) -> Series {
    let numeric = cells
        .iter()
        .all(|c| matches!(c, None | Some(Scalar::Number(_))));
    if numeric {
        let values: Vec<Option<f64>> = cells.iter().map(|c| c.and_then(Scalar::as_f64)).collect();
        return Series::new(name.into(), values);
    }
    let boolean = cells
        .iter()
        .all(|c| matches!(c, None | Some(Scalar::Bool(_))));
    if boolean {
        let values: Vec<Option<bool>> = cells
            .iter()
            .map(|c| match c {
                Some(Scalar::Bool(b)) => Some(*b),
                _ => None,
            })
            .collect();
        return Series::new(name.into(), values);
    }
    // mixed columns fall back to their display text
    let values: Vec<Option<String>> = cells.iter().map(|c| c.map(ToString::to_string)).collect();
    Series::new(name.into(), values)
}

impl ToDataFrame for RowTable {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        if self.is_empty() {
            return Ok(DataFrame::empty());
        }
        let mut columns: Vec<Column> = Vec::with_capacity(self.columns().len());
        for (idx, name) in self.columns().iter().enumerate() {
            let cells: Vec<Option<&Scalar>> = self.rows().iter().map(|r| r[idx].as_ref()).collect();
            columns.push(column_series(name, &cells).into());
        }
        DataFrame::new(columns)
    }
}

impl ToDataFrame for [NormalizedRow] {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        RowTable::from_rows(self).to_dataframe()
    }
}
