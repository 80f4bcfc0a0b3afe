//! Order session
//!
//! Holds one user's quoting state: the immutable catalog, the current
//! selections in pick order, and the last resolved calendar and result.
//! Every quote is recomputed fresh through the pure resolver and engine;
//! nothing is persisted between sessions.

use chrono::NaiveDate;

use crate::error::{PadocaError, PadocaResult};
use crate::models::{BudgetResult, Catalog, DateRange, ResolvedCalendar, Selection};
use crate::services::{budget, calendar};

/// One user's quoting session
#[derive(Debug, Clone)]
pub struct OrderSession {
    catalog: Catalog,
    selections: Vec<Selection>,
    last_calendar: Option<ResolvedCalendar>,
    last_result: Option<BudgetResult>,
}

impl OrderSession {
    /// Start a session over the given catalog
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selections: Vec::new(),
            last_calendar: None,
            last_result: None,
        }
    }

    /// Start a session over the reference bakery catalog
    pub fn with_default_catalog() -> Self {
        Self::new(Catalog::default_products())
    }

    /// The session's catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current selections in pick order
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// Add an item to the order, or update its quantity if already picked
    ///
    /// A repeated pick keeps the item's original position.
    ///
    /// # Errors
    ///
    /// Returns `UnknownItem` for a product not in the catalog, or a
    /// validation error for a zero quantity.
    pub fn select(&mut self, item: &str, quantity: u32) -> PadocaResult<()> {
        if !self.catalog.contains(item) {
            return Err(PadocaError::unknown_item(item));
        }

        let selection = Selection::new(item, quantity)?;
        match self.selections.iter_mut().find(|s| s.item == item) {
            Some(existing) => existing.quantity = selection.quantity,
            None => self.selections.push(selection),
        }
        Ok(())
    }

    /// Change the quantity of an already-picked item
    ///
    /// # Errors
    ///
    /// Returns `UnknownItem` if the item was never selected.
    pub fn set_quantity(&mut self, item: &str, quantity: u32) -> PadocaResult<()> {
        let selection = self
            .selections
            .iter_mut()
            .find(|s| s.item == item)
            .ok_or_else(|| PadocaError::unknown_item(item))?;

        if quantity == 0 {
            return Err(PadocaError::Validation(format!(
                "Quantity for '{}' must be at least 1",
                item
            )));
        }

        selection.quantity = quantity;
        Ok(())
    }

    /// Remove an item from the order; unknown items are a no-op
    pub fn deselect(&mut self, item: &str) {
        self.selections.retain(|s| s.item != item);
    }

    /// Resolve the calendar and compute the quote in one step
    ///
    /// On success the session keeps the calendar and result; on any error
    /// the previous ones are left untouched.
    pub fn quote(
        &mut self,
        range: &DateRange,
        exclude_weekends: bool,
        manual_exclusions: &[NaiveDate],
    ) -> PadocaResult<&BudgetResult> {
        let resolved = calendar::resolve(range, exclude_weekends, manual_exclusions)?;
        let result = budget::compute(&self.catalog, &self.selections, resolved.day_count())?;

        self.last_calendar = Some(resolved);
        self.last_result = Some(result);

        Ok(self.last_result.as_ref().unwrap())
    }

    /// The calendar from the most recent successful quote
    pub fn last_calendar(&self) -> Option<&ResolvedCalendar> {
        self.last_calendar.as_ref()
    }

    /// The most recent successful quote
    pub fn last_result(&self) -> Option<&BudgetResult> {
        self.last_result.as_ref()
    }
}
