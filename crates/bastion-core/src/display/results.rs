//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::format::Money;
use crate::models::{CheckoutRequest, PlanSelection};

/// Outcome of adding a plan to the cart.
pub struct AddResult {
    pub selection: PlanSelection,
    /// Cart size after the addition
    pub total_items: usize,
    /// Cart total after the addition
    pub total_price: f64,
}

impl fmt::Display for AddResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added '{}' to cart", self.selection.plan_title)?;
        writeln!(f)?;
        write!(f, "{}", self.selection)?;
        writeln!(f)?;
        writeln!(
            f,
            "Cart now holds {} item(s) totalling {}",
            self.total_items,
            Money(self.total_price)
        )
    }
}

/// Outcome of removing a cart line.
pub struct RemoveResult {
    /// One-based position the user asked for
    pub position: usize,
    /// The removed line, or `None` if the position was empty
    pub removed: Option<PlanSelection>,
}

impl fmt::Display for RemoveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.removed {
            Some(item) => writeln!(
                f,
                "Removed '{}' (line {}) from cart",
                item.plan_title, self.position
            ),
            None => writeln!(f, "No cart line at position {}; nothing removed", self.position),
        }
    }
}

impl fmt::Display for CheckoutRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Checkout")?;
        writeln!(f)?;
        for item in &self.line_items {
            writeln!(
                f,
                "- {} ({} employees): {}",
                item.plan_title,
                item.number_of_employees,
                Money(item.price)
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "**Total**: {} ({} item(s))",
            Money(self.total_price),
            self.total_items
        )
    }
}
