//! Quote table formatting
//!
//! Turns a computed quote into currency-formatted rows. The same rows feed
//! the on-screen table and every export format, so display and file
//! content never drift apart.

use serde::{Deserialize, Serialize};

use crate::models::BudgetResult;

/// Column headers, in the fixed export order
pub const QUOTE_COLUMNS: [&str; 5] = [
    "Item",
    "Valor Unitário",
    "Quantidade",
    "Dias Selecionados",
    "Valor Total",
];

/// One formatted row of the quote table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRow {
    /// Product name
    #[serde(rename = "Item")]
    pub item: String,

    /// Currency-formatted unit price
    #[serde(rename = "Valor Unitário")]
    pub unit_price: String,

    /// Units per billable day
    #[serde(rename = "Quantidade")]
    pub quantity: u32,

    /// Billable day count
    #[serde(rename = "Dias Selecionados")]
    pub days: u32,

    /// Currency-formatted line total
    #[serde(rename = "Valor Total")]
    pub line_total: String,
}

/// Build the formatted rows for a quote, one per line item in selection
/// order
pub fn quote_rows(result: &BudgetResult) -> Vec<QuoteRow> {
    result
        .line_items
        .iter()
        .map(|li| QuoteRow {
            item: li.item.clone(),
            unit_price: li.unit_price.to_string(),
            quantity: li.quantity,
            days: li.days_count,
            line_total: li.line_total.to_string(),
        })
        .collect()
}

/// Render the quote as a width-aligned text table with a TOTAL row
pub fn format_quote_table(result: &BudgetResult) -> String {
    if result.line_items.is_empty() {
        return "Nenhum item selecionado.".to_string();
    }

    let rows = quote_rows(result);

    // Column widths; product names are UTF-8, so count chars, not bytes
    let item_width = rows
        .iter()
        .map(|r| r.item.chars().count())
        .max()
        .unwrap_or(0)
        .max(QUOTE_COLUMNS[0].chars().count());

    let price_width = rows
        .iter()
        .map(|r| r.unit_price.chars().count())
        .max()
        .unwrap_or(0)
        .max(QUOTE_COLUMNS[1].chars().count());

    let qty_width = QUOTE_COLUMNS[2].chars().count();
    let days_width = QUOTE_COLUMNS[3].chars().count();

    let total_width = rows
        .iter()
        .map(|r| r.line_total.chars().count())
        .max()
        .unwrap_or(0)
        .max(QUOTE_COLUMNS[4].chars().count())
        .max(result.grand_total.to_string().chars().count());

    let mut output = String::new();
    output.push_str(&format!(
        "{:<item_width$}  {:>price_width$}  {:>qty_width$}  {:>days_width$}  {:>total_width$}\n",
        QUOTE_COLUMNS[0],
        QUOTE_COLUMNS[1],
        QUOTE_COLUMNS[2],
        QUOTE_COLUMNS[3],
        QUOTE_COLUMNS[4],
    ));

    output.push_str(&format!(
        "{:-<item_width$}  {:->price_width$}  {:->qty_width$}  {:->days_width$}  {:->total_width$}\n",
        "", "", "", "", "",
    ));

    for row in &rows {
        output.push_str(&format!(
            "{:<item_width$}  {:>price_width$}  {:>qty_width$}  {:>days_width$}  {:>total_width$}\n",
            row.item, row.unit_price, row.quantity, row.days, row.line_total,
        ));
    }

    output.push_str(&format!(
        "{:-<item_width$}  {:->price_width$}  {:->qty_width$}  {:->days_width$}  {:->total_width$}\n",
        "", "", "", "", "",
    ));

    output.push_str(&format!(
        "{:<item_width$}  {:>price_width$}  {:>qty_width$}  {:>days_width$}  {:>total_width$}\n",
        "TOTAL",
        "",
        "",
        "",
        result.grand_total.to_string(),
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LineItem, Money};

    fn sample_result() -> BudgetResult {
        BudgetResult::new(vec![
            LineItem::compute("Pão de Leite", Money::from_cents(200), 3, 2),
            LineItem::compute("Bolo de Milho", Money::from_cents(2500), 1, 2),
        ])
    }

    #[test]
    fn test_rows_in_selection_order() {
        let rows = quote_rows(&sample_result());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].item, "Pão de Leite");
        assert_eq!(rows[0].unit_price, "R$2,00");
        assert_eq!(rows[0].quantity, 3);
        assert_eq!(rows[0].days, 2);
        assert_eq!(rows[0].line_total, "R$12,00");
        assert_eq!(rows[1].item, "Bolo de Milho");
        assert_eq!(rows[1].line_total, "R$50,00");
    }

    #[test]
    fn test_table_contains_headers_and_total() {
        let table = format_quote_table(&sample_result());
        assert!(table.contains("Item"));
        assert!(table.contains("Valor Unitário"));
        assert!(table.contains("Dias Selecionados"));
        assert!(table.contains("R$12,00"));
        assert!(table.contains("R$50,00"));
        assert!(table.contains("TOTAL"));
        assert!(table.contains("R$62,00"));
    }

    #[test]
    fn test_empty_quote_table() {
        let empty = BudgetResult::new(vec![]);
        assert_eq!(format_quote_table(&empty), "Nenhum item selecionado.");
    }

    #[test]
    fn test_row_serialization_uses_export_columns() {
        let rows = quote_rows(&sample_result());
        let json = serde_json::to_string(&rows[0]).unwrap();
        for column in QUOTE_COLUMNS {
            assert!(json.contains(column));
        }
    }
}
