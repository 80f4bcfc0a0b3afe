//! CSV export functionality
//!
//! Writes the quote table as UTF-8 CSV, one row per line item with a
//! header row. The column set matches the on-screen table exactly; a
//! TOTAL row is deliberately absent, since totals are a display concern.

use std::io::Write;

use crate::error::{PadocaError, PadocaResult};
use crate::models::BudgetResult;
use crate::report::{quote_rows, QUOTE_COLUMNS};

/// Export a quote to CSV
pub fn export_quote_csv<W: Write>(result: &BudgetResult, writer: &mut W) -> PadocaResult<()> {
    writeln!(writer, "{}", QUOTE_COLUMNS.join(","))
        .map_err(|e| PadocaError::Export(e.to_string()))?;

    for row in quote_rows(result) {
        writeln!(
            writer,
            "{},{},{},{},{}",
            escape_csv(&row.item),
            escape_csv(&row.unit_price),
            row.quantity,
            row.days,
            escape_csv(&row.line_total)
        )
        .map_err(|e| PadocaError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
