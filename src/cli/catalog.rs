//! Catalog CLI command
//!
//! Prints the product list with locale-independent prices.

use crate::models::Catalog;

/// Format the product/price table
pub fn format_catalog_table(catalog: &Catalog) -> String {
    if catalog.is_empty() {
        return "Nenhum produto cadastrado.".to_string();
    }

    let name_width = catalog
        .entries()
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Produto".chars().count());

    let price_width = catalog
        .entries()
        .iter()
        .map(|e| e.unit_price.to_string().chars().count())
        .max()
        .unwrap_or(0)
        .max("Preço".chars().count());

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>price_width$}\n",
        "Produto", "Preço",
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->price_width$}\n",
        "", "",
    ));

    for entry in catalog.entries() {
        output.push_str(&format!(
            "{:<name_width$}  {:>price_width$}\n",
            entry.name,
            entry.unit_price.to_string(),
        ));
    }

    output
}

/// Handle the catalog command
pub fn handle_catalog_command(catalog: &Catalog) {
    print!("{}", format_catalog_table(catalog));
}
