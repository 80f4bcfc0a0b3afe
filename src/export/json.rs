//! JSON export functionality
//!
//! Exports the complete quote to JSON with schema versioning, and reads
//! one back for verification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{PadocaError, PadocaResult};
use crate::models::{BudgetResult, Money};
use crate::report::{quote_rows, QuoteRow};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full quote export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Billable day count the quote was computed for
    pub day_count: u32,

    /// Number of line items
    pub item_count: usize,

    /// One row per line item, same schema as the CSV export
    pub rows: Vec<QuoteRow>,

    /// Grand total in centavos, for exact verification
    pub grand_total_cents: i64,

    /// Currency-formatted grand total
    pub grand_total: String,
}

impl QuoteExport {
    /// Build an export from a computed quote
    pub fn from_result(result: &BudgetResult) -> Self {
        let day_count = result.line_items.first().map_or(0, |li| li.days_count);

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            day_count,
            item_count: result.item_count(),
            rows: quote_rows(result),
            grand_total_cents: result.grand_total.cents(),
            grand_total: result.grand_total.to_string(),
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if self.rows.len() != self.item_count {
            return Err(format!(
                "Row count mismatch: expected {}, got {}",
                self.item_count,
                self.rows.len()
            ));
        }

        // The formatted line totals must re-parse and sum to the grand total
        let mut summed = Money::zero();
        for row in &self.rows {
            let line_total = Money::parse(&row.line_total)
                .map_err(|e| format!("Row '{}': {}", row.item, e))?;
            summed += line_total;
        }

        if summed.cents() != self.grand_total_cents {
            return Err(format!(
                "Grand total mismatch: rows sum to {}, export says {}",
                summed.cents(),
                self.grand_total_cents
            ));
        }

        Ok(())
    }
}

/// Export a quote to JSON
pub fn export_quote_json<W: Write>(
    result: &BudgetResult,
    writer: &mut W,
    pretty: bool,
) -> PadocaResult<()> {
    let export = QuoteExport::from_result(result);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| PadocaError::Export(e.to_string()))?;

    Ok(())
}

/// Import a quote from a JSON export (for verification)
pub fn import_quote_json(json_str: &str) -> PadocaResult<QuoteExport> {
    let export: QuoteExport =
        serde_json::from_str(json_str).map_err(|e| PadocaError::Import(e.to_string()))?;

    export.validate().map_err(PadocaError::Import)?;

    Ok(export)
}
