//! Product catalog
//!
//! The fixed product-to-price mapping for one quoting session. Entries keep
//! their insertion order so price tables and pick-lists render the way the
//! bakery lists its products.

use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{PadocaError, PadocaResult};

/// A single product and its unit price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Product name, unique within the catalog
    pub name: String,

    /// Price for one unit of the product
    pub unit_price: Money,
}

impl CatalogEntry {
    /// Create a new catalog entry
    pub fn new(name: impl Into<String>, unit_price: Money) -> Self {
        Self {
            name: name.into(),
            unit_price,
        }
    }
}

/// Ordered product-to-price mapping, immutable for the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Create a catalog from a list of entries
    ///
    /// # Errors
    ///
    /// Returns a validation error if any name is blank, any price is
    /// negative, or two entries share a name.
    pub fn new(entries: Vec<CatalogEntry>) -> PadocaResult<Self> {
        for entry in &entries {
            if entry.name.trim().is_empty() {
                return Err(PadocaError::Validation(
                    "Catalog entry name cannot be blank".into(),
                ));
            }
            if entry.unit_price.is_negative() {
                return Err(PadocaError::Validation(format!(
                    "Catalog entry '{}' has a negative unit price",
                    entry.name
                )));
            }
        }

        let mut seen = std::collections::HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.name.as_str()) {
                return Err(PadocaError::Validation(format!(
                    "Duplicate catalog entry: {}",
                    entry.name
                )));
            }
        }

        Ok(Self { entries })
    }

    /// The reference bakery catalog
    pub fn default_products() -> Self {
        let entries = vec![
            CatalogEntry::new("Pão Francês", Money::from_cents(150)),
            CatalogEntry::new("Pão Francês com Margarina", Money::from_cents(300)),
            CatalogEntry::new("Pão de Leite", Money::from_cents(200)),
            CatalogEntry::new("Pão de Leite com Margarina", Money::from_cents(350)),
            CatalogEntry::new("Pão Doce Recheado", Money::from_cents(300)),
            CatalogEntry::new("Rosquinha Canela e Açúcar", Money::from_cents(300)),
            CatalogEntry::new("Broa de Milho", Money::from_cents(400)),
            CatalogEntry::new("Pão Carteira", Money::from_cents(250)),
            CatalogEntry::new("Pão Carteira com Margarina", Money::from_cents(400)),
            CatalogEntry::new("Bolo de Milho", Money::from_cents(2500)),
            CatalogEntry::new("Bolo de Caçarola", Money::from_cents(2500)),
            CatalogEntry::new("Café (Litro)", Money::from_cents(1500)),
            CatalogEntry::new("Leite (Litro)", Money::from_cents(1500)),
            CatalogEntry::new("Chá (Litro)", Money::from_cents(1200)),
        ];

        // The reference list is statically valid
        Self { entries }
    }

    /// Look up an entry by product name
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Check whether a product exists in the catalog
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All entries in catalog order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of products in the catalog
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog has no products
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_products() {
        let catalog = Catalog::default_products();
        assert_eq!(catalog.len(), 14);
        assert_eq!(
            catalog.get("Pão Francês").unwrap().unit_price,
            Money::from_cents(150)
        );
        assert_eq!(
            catalog.get("Bolo de Milho").unwrap().unit_price,
            Money::from_cents(2500)
        );
    }

    #[test]
    fn test_preserves_order() {
        let catalog = Catalog::default_products();
        assert_eq!(catalog.entries()[0].name, "Pão Francês");
        assert_eq!(catalog.entries()[13].name, "Chá (Litro)");
    }

    #[test]
    fn test_lookup_missing() {
        let catalog = Catalog::default_products();
        assert!(catalog.get("Croissant").is_none());
        assert!(!catalog.contains("Croissant"));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let entries = vec![
            CatalogEntry::new("Pão", Money::from_cents(100)),
            CatalogEntry::new("Pão", Money::from_cents(200)),
        ];
        let err = Catalog::new(entries).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_rejects_blank_name() {
        let entries = vec![CatalogEntry::new("  ", Money::from_cents(100))];
        assert!(Catalog::new(entries).is_err());
    }

    #[test]
    fn test_rejects_negative_price() {
        let entries = vec![CatalogEntry::new("Pão", Money::from_cents(-1))];
        assert!(Catalog::new(entries).is_err());
    }

    #[test]
    fn test_accepts_any_size() {
        let entries = vec![CatalogEntry::new("Pão", Money::from_cents(100))];
        let catalog = Catalog::new(entries).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
    }
}
