//! Side-by-side category comparison of two rows.

use crate::{Category, CategoryScores, ComparisonTable, EsgError, NormalizedRow};

/// Extract the environment, social and governance scores of a row.
///
/// # Errors
/// Returns `Data` naming the ticker and field when a score is missing or not
/// numeric.
pub fn category_scores(row: &NormalizedRow) -> Result<CategoryScores, EsgError> {
    let get = |category: Category| {
        let key = category.metric_key();
        row.number(key).ok_or_else(|| {
            EsgError::Data(format!("{key} missing or not numeric for {}", row.ticker()))
        })
    };
    Ok(CategoryScores {
        environment: get(Category::Environment)?,
        social: get(Category::Social)?,
        governance: get(Category::Governance)?,
    })
}

/// Build the three-row comparison of two rows, labelled by column.
///
/// # Errors
/// Fails if either row lacks one of the three category scores.
pub fn compare(
    a: &NormalizedRow,
    b: &NormalizedRow,
    label_a: impl Into<String>,
    label_b: impl Into<String>,
) -> Result<ComparisonTable, EsgError> {
    let sa = category_scores(a)?;
    let sb = category_scores(b)?;
    Ok(ComparisonTable::new([label_a.into(), label_b.into()], sa, sb))
}
