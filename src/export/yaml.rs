//! YAML export functionality
//!
//! Exports the quote to YAML for human-readable sharing. Same schema as
//! the JSON export.

use std::io::Write;

use crate::error::{PadocaError, PadocaResult};
use crate::export::json::QuoteExport;
use crate::models::BudgetResult;

/// Export a quote to YAML format
pub fn export_quote_yaml<W: Write>(result: &BudgetResult, writer: &mut W) -> PadocaResult<()> {
    let export = QuoteExport::from_result(result);

    writeln!(writer, "# Orçamento de encomenda - Padoca")
        .map_err(|e| PadocaError::Export(e.to_string()))?;
    writeln!(writer, "# Gerado em: {}", export.exported_at)
        .map_err(|e| PadocaError::Export(e.to_string()))?;
    writeln!(writer, "# Versão: {}", export.app_version)
        .map_err(|e| PadocaError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| PadocaError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| PadocaError::Export(e.to_string()))?;

    Ok(())
}

/// Import a quote from a YAML export
pub fn import_quote_yaml(yaml_str: &str) -> PadocaResult<QuoteExport> {
    let export: QuoteExport =
        serde_yaml::from_str(yaml_str).map_err(|e| PadocaError::Import(e.to_string()))?;

    export.validate().map_err(PadocaError::Import)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LineItem, Money};

    fn sample_result() -> BudgetResult {
        BudgetResult::new(vec![LineItem::compute(
            "Pão Francês",
            Money::from_cents(150),
            2,
            1,
        )])
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut output = Vec::new();
        export_quote_yaml(&sample_result(), &mut output).unwrap();

        let yaml = String::from_utf8(output).unwrap();
        assert!(yaml.starts_with("# Orçamento de encomenda"));

        let imported = import_quote_yaml(&yaml).unwrap();
        assert_eq!(imported.rows.len(), 1);
        assert_eq!(imported.grand_total, "R$3,00");
    }
}
