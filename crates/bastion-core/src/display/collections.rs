//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use super::format::Money;
use crate::models::{PlanOption, PlanSelection};

/// Borrowing view of the cart's line items with a totals footer.
///
/// Lines are numbered from 1, matching the positions accepted by the CLI's
/// remove command.
///
/// # Examples
///
/// ```rust
/// use bastion_core::{display::CartView, models::PlanSelection};
///
/// let items = vec![
///     PlanSelection::new("SOC 2 Pre-Audit Blueprint", 25, 1700.0),
///     PlanSelection::new("External Penetration Test", 25, 4500.0),
/// ];
/// let output = CartView(&items).to_string();
/// assert!(output.contains("## 1. SOC 2 Pre-Audit Blueprint"));
/// assert!(output.contains("**Total**: $6,200 (2 items)"));
/// ```
pub struct CartView<'a>(pub &'a [PlanSelection]);

impl fmt::Display for CartView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "Your cart is empty.");
        }

        writeln!(f, "# Cart")?;
        writeln!(f)?;
        for (position, item) in self.0.iter().enumerate() {
            writeln!(f, "## {}. {}", position + 1, item.plan_title)?;
            writeln!(f)?;
            write!(f, "{item}")?;
            writeln!(f)?;
        }

        let total: f64 = self.0.iter().map(|item| item.price).sum();
        let noun = if self.0.len() == 1 { "item" } else { "items" };
        writeln!(f, "**Total**: {} ({} {noun})", Money(total), self.0.len())
    }
}

/// Newtype wrapper for displaying calculator rows.
pub struct PlanOptions(pub Vec<PlanOption>);

impl PlanOptions {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of options in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the option at the given index.
    pub fn get(&self, index: usize) -> Option<&PlanOption> {
        self.0.get(index)
    }

    /// Get an iterator over the options.
    pub fn iter(&self) -> std::slice::Iter<'_, PlanOption> {
        self.0.iter()
    }
}

impl Index<usize> for PlanOptions {
    type Output = PlanOption;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for PlanOptions {
    type Item = PlanOption;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlanOptions {
    type Item = &'a PlanOption;
    type IntoIter = std::slice::Iter<'a, PlanOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PlanOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plans found.")
        } else {
            for option in &self.0 {
                write!(f, "{option}")?;
            }
            Ok(())
        }
    }
}
