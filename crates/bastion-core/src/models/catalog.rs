//! Catalog entry definitions.

use serde::{Deserialize, Serialize};

/// An employee-count range mapped to a fixed price. Both bounds are
/// inclusive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceBracket {
    pub min: u32,
    pub max: u32,
    pub price: f64,
}

impl PriceBracket {
    /// Returns true if `employees` falls within `min..=max`.
    pub fn contains(&self, employees: u32) -> bool {
        self.min <= employees && employees <= self.max
    }
}

/// How a catalog entry is priced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Pricing {
    /// Price depends on the employee-count bracket
    Tiered { brackets: Vec<PriceBracket> },
    /// Same price regardless of company size
    Flat { price: f64 },
}

/// A purchasable service package.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanCatalogEntry {
    /// Stable identifier, referenced by `exclusive_with`
    pub id: String,

    /// Display title, also the key stored on cart lines
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    pub pricing: Pricing,

    /// IDs of entries that cannot be in the cart together with this one.
    /// Declaration order decides which blocker is reported first.
    #[serde(default)]
    pub exclusive_with: Vec<String>,
}
