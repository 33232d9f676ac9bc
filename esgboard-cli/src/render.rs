//! Plain-text rendering of rows, tiles, and tables.

use std::fmt::Write as _;

use esgboard::{ComparisonTable, NormalizedRow, RowTable, ScoreCard};
use esgboard_core::Page;

const MISSING: &str = "n/a";

fn num(v: Option<f64>) -> String {
    v.map_or_else(|| MISSING.to_string(), |x| format!("{x:.2}"))
}

/// Lay out cells in left-aligned columns separated by two spaces.
pub fn grid(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut line = |cells: &[String]| {
        let mut buf = String::new();
        for (i, (cell, &w)) in cells.iter().zip(&widths).enumerate() {
            if i > 0 {
                buf.push_str("  ");
            }
            let _ = write!(buf, "{cell:<w$}");
        }
        out.push_str(buf.trim_end());
        out.push('\n');
    };
    line(headers);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    line(&rule);
    for row in rows {
        line(row);
    }
    out
}

/// Field/value listing of one row, in display order.
pub fn row(row: &NormalizedRow) -> String {
    let headers = ["field".to_string(), "value".to_string()];
    let body: Vec<Vec<String>> = row
        .columns()
        .map(|(k, v)| vec![k.to_string(), v.to_string()])
        .collect();
    grid(&headers, &body)
}

/// Headline metric tiles.
pub fn tiles(card: &ScoreCard) -> String {
    let risk = card.risk.map_or(MISSING, |r| r.label());
    let controversy = card.controversy.map_or(MISSING, |c| c.label());
    let mut out = String::new();
    let _ = writeln!(out, "{}", card.ticker);
    let _ = writeln!(out, "  Total ESG Risk     {}  ({risk})", num(card.total_esg));
    let _ = writeln!(out, "  Environment        {}", num(card.environment));
    let _ = writeln!(out, "  Social             {}", num(card.social));
    let _ = writeln!(out, "  Governance         {}", num(card.governance));
    let _ = writeln!(out, "  Controversy Level  {controversy}");
    out
}

/// Category rows with one column per compared ticker.
pub fn comparison(table: &ComparisonTable) -> String {
    let [a, b] = table.labels();
    let headers = ["Category".to_string(), a.clone(), b.clone()];
    let body: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|r| {
            vec![
                r.category.label().to_string(),
                format!("{:.2}", r.values[0]),
                format!("{:.2}", r.values[1]),
            ]
        })
        .collect();
    grid(&headers, &body)
}

/// Rows concatenated into one table; absent cells are blank.
pub fn table(table: &RowTable) -> String {
    let body: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|cells| {
            cells
                .iter()
                .map(|c| c.as_ref().map(ToString::to_string).unwrap_or_default())
                .collect()
        })
        .collect();
    grid(table.columns(), &body)
}

/// Landing text with the available pages.
pub fn welcome() -> String {
    let mut out = String::from("ESG Dashboard\n\n");
    out.push_str(
        "Look up Environmental, Social and Governance risk scores for listed companies.\n\n",
    );
    for page in Page::ALL {
        let usage = match page {
            Page::Welcome => "esgboard welcome",
            Page::ViewScore => "esgboard view <TICKER>",
            Page::Compare => "esgboard compare <TICKER> <TICKER>",
            Page::Upload => "esgboard upload <FILE.csv> (column `ticker_code`, first 100 rows)",
        };
        match page.action() {
            Some(action) => {
                let _ = writeln!(out, "  {:<26}{usage}  [{action}]", page.title());
            }
            None => {
                let _ = writeln!(out, "  {:<26}{usage}", page.title());
            }
        }
    }
    out
}
