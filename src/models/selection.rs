//! User item selections
//!
//! One `Selection` per chosen product, in pick order. Quantities are always
//! at least one; a deselected item is removed, never zeroed.

use serde::{Deserialize, Serialize};

use crate::error::{PadocaError, PadocaResult};

/// A chosen catalog item plus desired quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Name of the selected catalog item
    pub item: String,

    /// Units ordered per billable day, at least 1
    pub quantity: u32,
}

impl Selection {
    /// Create a new selection
    ///
    /// # Errors
    ///
    /// Returns a validation error if the item name is blank or the
    /// quantity is zero.
    pub fn new(item: impl Into<String>, quantity: u32) -> PadocaResult<Self> {
        let item = item.into();

        if item.trim().is_empty() {
            return Err(PadocaError::Validation(
                "Selection item name cannot be blank".into(),
            ));
        }
        if quantity == 0 {
            return Err(PadocaError::Validation(format!(
                "Quantity for '{}' must be at least 1",
                item
            )));
        }

        Ok(Self { item, quantity })
    }
}
