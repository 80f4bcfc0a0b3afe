//! Budget engine
//!
//! The pure computation at the heart of the calculator: turns (catalog,
//! selections, billable day count) into line items and a grand total. All
//! arithmetic is exact i64 centavos, so the displayed total always equals
//! the sum of the displayed line totals.

use crate::error::{PadocaError, PadocaResult};
use crate::models::{BudgetResult, Catalog, LineItem, Selection};

/// Compute a quote for the given selections
///
/// `day_count` must be the cardinality of a non-empty resolved calendar;
/// the caller is responsible for having handled `EmptyCalendar` first.
/// Line items come out in selection order. Either the full result is
/// produced or an error is returned; there are no partial results.
///
/// # Errors
///
/// - `UnknownItem` when a selection references a product absent from the
///   catalog. The shell only ever submits catalog-valid items, so this
///   signals a caller defect rather than a user mistake.
/// - `EmptyCalendar` when `day_count` is zero.
pub fn compute(
    catalog: &Catalog,
    selections: &[Selection],
    day_count: u32,
) -> PadocaResult<BudgetResult> {
    if day_count == 0 {
        return Err(PadocaError::EmptyCalendar);
    }

    let mut line_items = Vec::with_capacity(selections.len());

    for selection in selections {
        let entry = catalog
            .get(&selection.item)
            .ok_or_else(|| PadocaError::unknown_item(&selection.item))?;

        line_items.push(LineItem::compute(
            &entry.name,
            entry.unit_price,
            selection.quantity,
            day_count,
        ));
    }

    Ok(BudgetResult::new(line_items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn selections(items: &[(&str, u32)]) -> Vec<Selection> {
        items
            .iter()
            .map(|(name, qty)| Selection::new(*name, *qty).unwrap())
            .collect()
    }

    #[test]
    fn test_single_item_single_day() {
        let catalog = Catalog::default_products();
        let result = compute(&catalog, &selections(&[("Pão Francês", 2)]), 1).unwrap();

        assert_eq!(result.item_count(), 1);
        assert_eq!(result.line_items[0].line_total, Money::from_cents(300));
        assert_eq!(result.grand_total, Money::from_cents(300));
        assert_eq!(result.grand_total.to_string(), "R$3,00");
    }

    #[test]
    fn test_multi_day_multiplication() {
        // 10 units across 5 billable days at R$1,50
        let catalog = Catalog::default_products();
        let result = compute(&catalog, &selections(&[("Pão Francês", 10)]), 5).unwrap();

        assert_eq!(result.line_items[0].days_count, 5);
        assert_eq!(result.line_items[0].line_total, Money::from_cents(7500));
        assert_eq!(result.grand_total.to_string(), "R$75,00");
    }

    #[test]
    fn test_two_selections_keep_order() {
        let catalog = Catalog::default_products();
        let result = compute(
            &catalog,
            &selections(&[("Pão de Leite", 3), ("Bolo de Milho", 1)]),
            2,
        )
        .unwrap();

        assert_eq!(result.item_count(), 2);
        assert_eq!(result.line_items[0].item, "Pão de Leite");
        assert_eq!(result.line_items[0].line_total, Money::from_cents(1200));
        assert_eq!(result.line_items[1].item, "Bolo de Milho");
        assert_eq!(result.line_items[1].line_total, Money::from_cents(5000));
        assert_eq!(result.grand_total, Money::from_cents(6200));
    }

    #[test]
    fn test_grand_total_equals_sum_of_lines() {
        let catalog = Catalog::default_products();
        let picks = selections(&[
            ("Pão Francês", 7),
            ("Rosquinha Canela e Açúcar", 3),
            ("Café (Litro)", 2),
            ("Chá (Litro)", 1),
        ]);
        let result = compute(&catalog, &picks, 9).unwrap();

        let summed: Money = result.line_items.iter().map(|li| li.line_total).sum();
        assert_eq!(result.grand_total, summed);
    }

    #[test]
    fn test_unknown_item() {
        let catalog = Catalog::default_products();
        let err = compute(&catalog, &selections(&[("Croissant", 1)]), 1).unwrap_err();
        assert!(matches!(err, PadocaError::UnknownItem { ref name } if name == "Croissant"));
    }

    #[test]
    fn test_unknown_item_yields_no_partial_result() {
        let catalog = Catalog::default_products();
        let picks = selections(&[("Pão Francês", 1), ("Croissant", 1)]);
        assert!(compute(&catalog, &picks, 1).is_err());
    }

    #[test]
    fn test_zero_day_count_rejected() {
        let catalog = Catalog::default_products();
        let err = compute(&catalog, &selections(&[("Pão Francês", 1)]), 0).unwrap_err();
        assert!(matches!(err, PadocaError::EmptyCalendar));
    }

    #[test]
    fn test_no_selections_is_empty_quote() {
        let catalog = Catalog::default_products();
        let result = compute(&catalog, &[], 3).unwrap();
        assert_eq!(result.item_count(), 0);
        assert_eq!(result.grand_total, Money::zero());
    }

    #[test]
    fn test_compute_is_idempotent() {
        let catalog = Catalog::default_products();
        let picks = selections(&[("Pão Carteira", 4), ("Leite (Litro)", 2)]);

        let a = compute(&catalog, &picks, 6).unwrap();
        let b = compute(&catalog, &picks, 6).unwrap();
        assert_eq!(a, b);
    }
}
