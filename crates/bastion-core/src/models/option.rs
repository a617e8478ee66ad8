//! Calculator listing row.

use serde::{Deserialize, Serialize};

use super::PlanCatalogEntry;

/// A catalog entry as shown on the pricing calculator: its price for the
/// chosen company size and whether it can be added right now.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanOption {
    /// Catalog entry ID
    pub id: String,
    /// Display title
    pub title: String,
    pub description: Option<String>,
    /// Employee count the price was resolved for
    pub employees: Option<u32>,
    /// Price for `employees`, when given
    pub price: Option<f64>,
    /// Lowest price the entry can have
    pub starting_price: Option<f64>,
    /// Whether the entry is already in the cart
    pub in_cart: bool,
    /// Title of the cart entry blocking selection, if any
    pub blocked_by: Option<String>,
}

impl PlanOption {
    pub fn is_selectable(&self) -> bool {
        self.blocked_by.is_none()
    }

    pub(crate) fn from_entry(entry: &PlanCatalogEntry) -> Self {
        Self {
            id: entry.id.clone(),
            title: entry.title.clone(),
            description: entry.description.clone(),
            employees: None,
            price: None,
            starting_price: entry.pricing.starting_price(),
            in_cart: false,
            blocked_by: None,
        }
    }
}
