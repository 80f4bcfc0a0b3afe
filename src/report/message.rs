//! Order message rendering
//!
//! Builds the plain-text order summary sent to the vendor: a greeting,
//! one line per item, and the grand total. The text introduces nothing a
//! percent-encoder cannot round-trip; escaping itself is the shell's job.

use crate::models::BudgetResult;

/// Render the human-readable order message for a quote
pub fn order_message(result: &BudgetResult, greeting_name: Option<&str>) -> String {
    let mut message = match greeting_name {
        Some(name) => format!("Olá, {}! Gostaria de fazer uma encomenda:\n", name),
        None => "Olá! Gostaria de fazer uma encomenda:\n".to_string(),
    };

    for li in &result.line_items {
        message.push_str(&format!(
            "{} - {} unidades x {} dias = {}\n",
            li.item, li.quantity, li.days_count, li.line_total
        ));
    }

    message.push_str(&format!("Total do pedido: {}", result.grand_total));
    message
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
    fn test_message_lines() {
        let message = order_message(&sample_result(), None);
        let lines: Vec<&str> = message.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Olá! Gostaria de fazer uma encomenda:");
        assert_eq!(lines[1], "Pão de Leite - 3 unidades x 2 dias = R$12,00");
        assert_eq!(lines[2], "Bolo de Milho - 1 unidades x 2 dias = R$50,00");
        assert_eq!(lines[3], "Total do pedido: R$62,00");
    }

    #[test]
    fn test_message_with_greeting_name() {
        let message = order_message(&sample_result(), Some("Dona Maria"));
        assert!(message.starts_with("Olá, Dona Maria! Gostaria de fazer uma encomenda:"));
    }

    #[test]
    fn test_message_has_no_trailing_newline() {
        let message = order_message(&sample_result(), None);
        assert!(!message.ends_with('\n'));
    }
}
