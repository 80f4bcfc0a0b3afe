//! Computed quote output types
//!
//! A `LineItem` is one selection's computed cost contribution; a
//! `BudgetResult` is the full quote. Both are immutable after computation:
//! recalculating means building a fresh result, never mutating an old one.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// One selection's computed cost contribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name
    pub item: String,

    /// Catalog price for one unit
    pub unit_price: Money,

    /// Units ordered per billable day
    pub quantity: u32,

    /// Number of billable days the order covers
    pub days_count: u32,

    /// unit_price × quantity × days_count, exact in centavos
    pub line_total: Money,
}

impl LineItem {
    /// Compute a line item from its inputs
    pub fn compute(item: impl Into<String>, unit_price: Money, quantity: u32, days_count: u32) -> Self {
        Self {
            item: item.into(),
            unit_price,
            quantity,
            days_count,
            line_total: unit_price * quantity * days_count,
        }
    }
}

/// A complete computed quote: line items in selection order plus the total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetResult {
    /// One entry per selection, in the order selections were made
    pub line_items: Vec<LineItem>,

    /// Sum of all line totals; always equals the sum of the displayed
    /// per-line values
    pub grand_total: Money,
}

impl BudgetResult {
    /// Assemble a result from computed line items
    pub fn new(line_items: Vec<LineItem>) -> Self {
        let grand_total = line_items.iter().map(|li| li.line_total).sum();
        Self {
            line_items,
            grand_total,
        }
    }

    /// Number of line items in the quote
    pub fn item_count(&self) -> usize {
        self.line_items.len()
    }
}
