//! The cart store.
//!
//! [`CartStore`] is the single source of truth for selected plans. It keeps
//! an ordered list of [`PlanSelection`]s in memory and writes the whole list
//! back through its [`CartPersistence`] after every mutation.
//!
//! The saved cart is read exactly once, when the store is opened. Two stores
//! over the same storage do not observe each other's writes until one of
//! them is reopened.
//!
//! The store trusts its callers: [`CartStore::add_to_cart`] appends without
//! checking exclusivity. Callers that need the gate go through
//! [`Shop::select_plan`](crate::shop::Shop::select_plan).
//!
//! # Examples
//!
//! ```rust
//! use bastion_core::{CartStore, MemoryPersistence, PlanSelection};
//!
//! # fn example() -> bastion_core::Result<()> {
//! let mut cart = CartStore::open(MemoryPersistence::new());
//! cart.add_to_cart(PlanSelection::new("SOC 2 Pre-Audit Blueprint", 25, 1700.0))?;
//! cart.add_to_cart(PlanSelection::new("External Penetration Test", 25, 4500.0))?;
//!
//! assert_eq!(cart.total_items(), 2);
//! assert_eq!(cart.total_price(), 6200.0);
//! assert!(cart.is_plan_selected("SOC 2 Pre-Audit Blueprint"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use log::{debug, warn};

use crate::{
    error::Result,
    exclusivity::SelectedPlans,
    models::{CheckoutRequest, PlanSelection},
    persistence::CartPersistence,
};

pub mod diagnostics;

#[cfg(test)]
mod tests;

pub use diagnostics::{CartDiagnostic, Diagnostics};

/// Ordered, persisted collection of selected plans.
#[derive(Debug)]
pub struct CartStore<P> {
    items: Vec<PlanSelection>,
    persistence: P,
}

impl<P: CartPersistence> CartStore<P> {
    /// Opens the store, logging any unreadable saved cart.
    pub fn open(persistence: P) -> Self {
        Self::open_with_diagnostics(persistence, &Diagnostics::default())
    }

    /// Opens the store, loading whatever `persistence` holds.
    ///
    /// A saved cart that cannot be read is reported to `diagnostics`, removed
    /// from storage, and the store starts empty.
    pub fn open_with_diagnostics(mut persistence: P, diagnostics: &Diagnostics) -> Self {
        let items = match persistence.load() {
            Ok(items) => items,
            Err(e) => {
                diagnostics.report(&CartDiagnostic::DiscardedSavedCart {
                    reason: e.to_string(),
                });
                if let Err(e) = persistence.discard() {
                    warn!("Failed to remove unreadable saved cart: {e}");
                }
                Vec::new()
            }
        };
        debug!("Opened cart with {} item(s)", items.len());

        Self { items, persistence }
    }

    /// Appends a line item and persists the cart.
    ///
    /// No deduplication or exclusivity check is performed. If the write
    /// fails the item stays in memory and the error is returned.
    pub fn add_to_cart(&mut self, selection: PlanSelection) -> Result<()> {
        debug!(
            "Adding '{}' for {} employees at {}",
            selection.plan_title, selection.number_of_employees, selection.price
        );
        self.items.push(selection);
        self.persist()
    }

    /// Removes the line at `index`.
    ///
    /// An out-of-range index is a no-op: nothing is removed or written and
    /// `Ok(None)` is returned.
    pub fn remove_from_cart(&mut self, index: usize) -> Result<Option<PlanSelection>> {
        if index >= self.items.len() {
            debug!(
                "Ignoring removal of line {index}; cart has {} item(s)",
                self.items.len()
            );
            return Ok(None);
        }

        let removed = self.items.remove(index);
        debug!("Removed '{}' from cart", removed.plan_title);
        self.persist()?;
        Ok(Some(removed))
    }

    /// Empties the cart and persists the empty list.
    pub fn clear_cart(&mut self) -> Result<()> {
        debug!("Clearing cart of {} item(s)", self.items.len());
        self.items.clear();
        self.persist()
    }

    /// Snapshots the cart for the checkout service, then clears it.
    pub fn checkout(&mut self) -> Result<CheckoutRequest> {
        let request = CheckoutRequest::from_items(self.items.clone());
        self.clear_cart()?;
        Ok(request)
    }

    /// Whether any line's title equals `title` exactly.
    pub fn is_plan_selected(&self, title: &str) -> bool {
        self.items.is_plan_selected(title)
    }

    /// Sum of line prices.
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[PlanSelection] {
        &self.items
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    fn persist(&mut self) -> Result<()> {
        self.persistence.save(&self.items)
    }
}

impl<P: CartPersistence> SelectedPlans for CartStore<P> {
    fn is_plan_selected(&self, title: &str) -> bool {
        CartStore::is_plan_selected(self, title)
    }
}
