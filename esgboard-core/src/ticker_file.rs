//! Ticker lists uploaded as CSV.

use std::io::Read;

use crate::{EsgError, Ticker, TickerBatch};

fn csv_err(e: &csv::Error) -> EsgError {
    EsgError::Csv(e.to_string())
}

/// Read at most `limit` data rows of `column` from CSV input.
///
/// Rows past the limit are counted as dropped and never looked at. Blank
/// cells in the kept rows are skipped.
///
/// # Errors
/// Returns `Csv` for malformed input, and `InvalidArg` when the column is
/// missing or a cell is not a valid ticker.
pub fn read_ticker_batch<R: Read>(
    reader: R,
    column: &str,
    limit: usize,
) -> Result<TickerBatch, EsgError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let idx = rdr
        .headers()
        .map_err(|e| csv_err(&e))?
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| EsgError::InvalidArg(format!("missing required column '{column}'")))?;

    let mut tickers: Vec<Ticker> = Vec::new();
    let mut kept_rows = 0usize;
    let mut dropped = 0usize;
    let mut record = csv::StringRecord::new();
    while rdr.read_record(&mut record).map_err(|e| csv_err(&e))? {
        if kept_rows >= limit {
            dropped += 1;
            continue;
        }
        kept_rows += 1;
        let cell = record.get(idx).unwrap_or_default();
        if cell.is_empty() {
            continue;
        }
        let ticker = Ticker::new(cell).map_err(|e| {
            EsgError::InvalidArg(format!("row {kept_rows}: {e}"))
        })?;
        tickers.push(ticker);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "esgboard::ticker_file",
        kept = tickers.len(),
        dropped,
        "read ticker batch"
    );

    Ok(TickerBatch::from_parts(tickers, dropped))
}
